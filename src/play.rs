use std::cell::RefCell;
use std::rc::Rc;

use crossbeam_channel::{unbounded, Receiver, Sender};
use rand::prelude::ThreadRng;
use rand::{thread_rng, Rng};

use crate::games::chess::moves::ChessMove;
use crate::games::chess::squares::Square;
use crate::games::chess::{Chessboard, GameStatus};
use crate::games::Color;

/// Gets notified after every state transition of the session it subscribed to.
pub trait SessionObserver {
    fn state_changed(&mut self);
}

pub type ObserverHandle = Rc<RefCell<dyn SessionObserver>>;

pub fn to_observer_handle<O: SessionObserver + 'static>(observer: O) -> ObserverHandle {
    Rc::new(RefCell::new(observer))
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ObserverId(u64);

/// A single game in progress. All interaction goes through [`select_square`]
/// and [`reset`]; the session owns its board, so callers only ever see state
/// snapshots through the accessors.
///
/// [`select_square`]: Session::select_square
/// [`reset`]: Session::reset
pub struct Session<R: Rng> {
    board: Chessboard,
    current_player: Color,
    selected: Option<Square>,
    valid_moves: Vec<Square>,
    status: GameStatus,
    observers: Vec<(ObserverId, ObserverHandle)>,
    next_observer: u64,
    announcer: Sender<String>,
    announcements: Receiver<String>,
    rng: R,
}

impl Default for Session<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Session<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(thread_rng())
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(rng: R) -> Self {
        Self::from_position(Chessboard::startpos(), Color::White, rng)
    }

    pub fn from_position(board: Chessboard, current_player: Color, mut rng: R) -> Self {
        let (announcer, announcements) = unbounded();
        let status = board.status_for(current_player, &mut rng);
        Self {
            board,
            current_player,
            selected: None,
            valid_moves: Vec::new(),
            status,
            observers: Vec::new(),
            next_observer: 0,
            announcer,
            announcements,
            rng,
        }
    }

    pub fn board(&self) -> &Chessboard {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn selected_square(&self) -> Option<Square> {
        self.selected
    }

    pub fn valid_moves(&self) -> &[Square] {
        &self.valid_moves
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn subscribe(&mut self, observer: ObserverHandle) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, observer));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let len = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != len
    }

    /// Announcements are queued on a channel so a front-end can drain them
    /// whenever it redraws. The session keeps its own receiver, which means
    /// sending can't fail even with no front-end attached.
    pub fn announcements(&self) -> Receiver<String> {
        self.announcements.clone()
    }

    fn announce(&self, message: String) {
        // the session holds a receiver, so the channel is never disconnected
        _ = self.announcer.send(message);
    }

    fn notify_observers(&self) {
        for (_, observer) in &self.observers {
            observer.borrow_mut().state_changed();
        }
    }

    /// The single entry point for playing: selects a piece, deselects it,
    /// switches the selection, or executes a move, depending on what is
    /// currently selected and what sits on `position`. Once the game is over
    /// the board is frozen until [`reset`](Session::reset).
    pub fn select_square(&mut self, position: Square) {
        if self.status.is_game_over() {
            return;
        }
        match self.selected {
            Some(selected) if selected == position => {
                self.selected = None;
                self.valid_moves.clear();
            }
            Some(selected) if self.valid_moves.contains(&position) => {
                self.execute_move(ChessMove::new(selected, position));
            }
            _ => {
                match self.board.piece_on(position) {
                    Some(piece) if piece.color == self.current_player => {
                        self.selected = Some(position);
                        self.valid_moves = self.board.legal_moves(position, &mut self.rng);
                    }
                    _ if self.selected.is_none() => {
                        // clicking an empty or enemy square with nothing
                        // selected does nothing at all
                        return;
                    }
                    _ => {
                        self.selected = None;
                        self.valid_moves.clear();
                    }
                }
            }
        }
        self.notify_observers();
    }

    fn execute_move(&mut self, mov: ChessMove) {
        let mover = self.current_player;
        let (board, record) = self.board.make_move_recorded(mov, &mut self.rng);
        self.board = board;
        self.selected = None;
        self.valid_moves.clear();
        let opponent = mover.other();
        self.status = self.board.status_for(opponent, &mut self.rng);
        self.current_player = opponent;
        if let Some(captured) = record.and_then(|r| r.captured) {
            self.announce(format!("{mover} captured {0}!", captured.kind));
        }
        match self.status {
            GameStatus::Check => self.announce(format!("{opponent} is in check!")),
            GameStatus::Checkmate => self.announce(format!("Checkmate! {mover} wins!")),
            GameStatus::Stalemate => self.announce("Stalemate! The game is a draw.".to_string()),
            GameStatus::Playing => (),
        }
    }

    pub fn reset(&mut self) {
        self.board = Chessboard::startpos();
        self.current_player = Color::White;
        self.selected = None;
        self.valid_moves.clear();
        self.status = GameStatus::Playing;
        self.announce("New game started!".to_string());
        self.notify_observers();
    }
}
