use std::cell::Cell;
use std::rc::Rc;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::play::{to_observer_handle, Session, SessionObserver};
use crate::ui::{display_message, get_input, Input, Message};

pub mod games;

pub mod general;

pub mod play;

pub mod ui;

/// An 8x8 chess variant with chaotic house rules.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CommandLineArgs {
    /// Seed for the random elements of the rules, for reproducible games.
    #[arg(long, short)]
    seed: Option<u64>,
    /// Print the board as plain ascii instead of colored unicode.
    #[arg(long)]
    ascii: bool,
}

#[derive(Debug)]
struct RedrawFlag {
    dirty: Rc<Cell<bool>>,
}

impl SessionObserver for RedrawFlag {
    fn state_changed(&mut self) {
        self.dirty.set(true);
    }
}

pub fn play_loop<R: Rng>(mut session: Session<R>, ascii: bool) {
    let announcements = session.announcements();
    let dirty = Rc::new(Cell::new(true));
    session.subscribe(to_observer_handle(RedrawFlag {
        dirty: Rc::clone(&dirty),
    }));
    loop {
        for message in announcements.try_iter() {
            display_message(Message::Info, &message);
        }
        if dirty.replace(false) {
            if ascii {
                print!("{0}", session.board().as_ascii_diagram());
                display_message(
                    Message::Info,
                    &format!("{0} to move ({1})", session.current_player(), session.status()),
                );
            } else {
                ui::pretty::show(&session);
            }
        }
        match get_input() {
            Ok(Input::Quit) => break,
            Ok(Input::Reset) => session.reset(),
            Ok(Input::Select(square)) => session.select_square(square),
            Err(err) => display_message(Message::Error, &err),
        }
    }
}

pub fn run_program() {
    let args = CommandLineArgs::parse();
    match args.seed {
        Some(seed) => play_loop(Session::with_rng(StdRng::seed_from_u64(seed)), args.ascii),
        None => play_loop(Session::new(), args.ascii),
    }
}
