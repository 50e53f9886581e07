//! Line commands typed at the console prompt.

use media_extract_core::{InputMode, Msg};
use thiserror::Error;

pub(crate) const HELP: &str = "\
commands:
  single | multi        switch input mode (resets entries and results)
  add                   add another target row (multi mode)
  set <n> <url>         set row n to url
  remove <n>            remove row n
  clear                 reset rows and results
  extract               run extraction
  download <n>          download result card n
  show                  redraw the console
  help                  show this text
  quit                  exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// Forward straight to the state machine.
    Dispatch(Msg),
    /// Download the result card at a zero-based index.
    Download { card: usize },
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}` (try `help`)")]
    UnknownVerb(String),
    #[error("`{verb}` needs a {what}")]
    MissingArgument {
        verb: &'static str,
        what: &'static str,
    },
    #[error("`{0}` is not a row or card number (they start at 1)")]
    InvalidPosition(String),
}

/// Parse one input line. Positions are 1-based as displayed.
pub(crate) fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_start();
    let (verb, rest) = match line.find(char::is_whitespace) {
        Some(split) => (&line[..split], line[split..].trim_start()),
        None => (line, ""),
    };
    if verb.is_empty() {
        return Err(CommandError::Empty);
    }

    match verb.to_ascii_lowercase().as_str() {
        "single" => Ok(Command::Dispatch(Msg::ModeSelected(InputMode::Single))),
        "multi" | "multiple" => Ok(Command::Dispatch(Msg::ModeSelected(InputMode::Multiple))),
        "add" => Ok(Command::Dispatch(Msg::EntryAdded)),
        "set" => {
            let (position, value) = match rest.find(char::is_whitespace) {
                Some(split) => (&rest[..split], rest[split..].trim_start()),
                None => (rest, ""),
            };
            let position = parse_position("set", position)?;
            Ok(Command::Dispatch(Msg::EntryChanged {
                position,
                value: value.to_string(),
            }))
        }
        "remove" | "rm" => {
            let position = parse_position("remove", rest.trim())?;
            Ok(Command::Dispatch(Msg::EntryRemoved { position }))
        }
        "clear" => Ok(Command::Dispatch(Msg::ClearClicked)),
        "extract" | "run" => Ok(Command::Dispatch(Msg::ExtractClicked)),
        "download" | "dl" => {
            let card = parse_position("download", rest.trim())?;
            Ok(Command::Download { card })
        }
        "show" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::UnknownVerb(other.to_string())),
    }
}

fn parse_position(verb: &'static str, raw: &str) -> Result<usize, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::MissingArgument {
            verb,
            what: "number",
        });
    }
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::InvalidPosition(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mode_and_simple_verbs() {
        assert_eq!(
            parse_command("multi"),
            Ok(Command::Dispatch(Msg::ModeSelected(InputMode::Multiple)))
        );
        assert_eq!(
            parse_command("  SINGLE "),
            Ok(Command::Dispatch(Msg::ModeSelected(InputMode::Single)))
        );
        assert_eq!(parse_command("add"), Ok(Command::Dispatch(Msg::EntryAdded)));
        assert_eq!(parse_command("clear"), Ok(Command::Dispatch(Msg::ClearClicked)));
        assert_eq!(parse_command("extract"), Ok(Command::Dispatch(Msg::ExtractClicked)));
        assert_eq!(parse_command("show"), Ok(Command::Show));
        assert_eq!(parse_command("?"), Ok(Command::Help));
        assert_eq!(parse_command("exit"), Ok(Command::Quit));
    }

    #[test]
    fn set_converts_position_and_keeps_url_text() {
        assert_eq!(
            parse_command("set 2 https://instagram.com/p/x?a=1 b"),
            Ok(Command::Dispatch(Msg::EntryChanged {
                position: 1,
                value: "https://instagram.com/p/x?a=1 b".to_string(),
            }))
        );
        assert_eq!(
            parse_command("set 1 https://x.com/a  "),
            Ok(Command::Dispatch(Msg::EntryChanged {
                position: 0,
                value: "https://x.com/a  ".to_string(),
            }))
        );
        assert_eq!(
            parse_command("set 1"),
            Ok(Command::Dispatch(Msg::EntryChanged {
                position: 0,
                value: String::new(),
            }))
        );
    }

    #[test]
    fn remove_and_download_take_positions() {
        assert_eq!(
            parse_command("remove 3"),
            Ok(Command::Dispatch(Msg::EntryRemoved { position: 2 }))
        );
        assert_eq!(parse_command("download 1"), Ok(Command::Download { card: 0 }));
    }

    #[test]
    fn bad_input_is_reported() {
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
        assert_eq!(
            parse_command("fetch"),
            Err(CommandError::UnknownVerb("fetch".to_string()))
        );
        assert_eq!(
            parse_command("remove"),
            Err(CommandError::MissingArgument {
                verb: "remove",
                what: "number"
            })
        );
        assert_eq!(
            parse_command("download 0"),
            Err(CommandError::InvalidPosition("0".to_string()))
        );
        assert_eq!(
            parse_command("set x https://x.com"),
            Err(CommandError::InvalidPosition("x".to_string()))
        );
    }
}
