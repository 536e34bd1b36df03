use std::str::FromStr;

use colored::Colorize;
use strum_macros::Display;

use crate::games::chess::squares::Square;
use crate::general::common::read_line_from_stdin;

pub mod pretty;

#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
pub enum Message {
    Info,
    Warning,
    Error,
}

impl Message {
    fn message_prefix(self) -> String {
        match self {
            Message::Info => "".to_string(),
            Message::Warning => "Warning: ".yellow().to_string(),
            Message::Error => "Error: ".red().to_string(),
        }
    }
}

pub fn display_message(typ: Message, message: &str) {
    println!("{0}{message}", typ.message_prefix());
}

/// What the user typed at the prompt: either a square to select or one of a
/// handful of commands.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Input {
    Select(Square),
    Reset,
    Quit,
}

pub fn get_input() -> Result<Input, String> {
    // stdin closing ends the game the same way as typing 'quit'
    let Ok(line) = read_line_from_stdin() else {
        return Ok(Input::Quit);
    };
    let word = line.trim();
    match word {
        "q" | "quit" | "exit" => Ok(Input::Quit),
        "reset" | "new" => Ok(Input::Reset),
        _ => Square::from_str(word)
            .map(Input::Select)
            .map_err(|err| format!("{err}. Enter a square like 'e2', 'reset' or 'quit'")),
    }
}

#[cfg(test)]
mod tests {
    use crate::ui::Message;

    #[test]
    fn message_prefix_test() {
        colored::control::set_override(false);
        assert_eq!(Message::Info.message_prefix(), "");
        assert_eq!(Message::Warning.message_prefix(), "Warning: ");
        assert_eq!(Message::Error.message_prefix(), "Error: ");
    }
}
