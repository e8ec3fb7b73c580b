use crate::domain::NewActivity;
use std::str::FromStr;
use thiserror::Error;

/// One line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle(u32),
    Dot { challenge_id: u32, dot_index: usize },
    Log(NewActivity),
    Level(u32),
    Streak(u32),
    Status,
    Tasks,
    Done,
    Activity,
    Progress,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("'{value}' is not a valid {what}")]
    InvalidNumber { what: &'static str, value: String },
}

fn parse_number<T: FromStr>(value: Option<&str>, what: &'static str, usage: &'static str) -> Result<T, CommandError> {
    let value = value.ok_or(CommandError::Usage(usage))?;
    value.parse().map_err(|_| CommandError::InvalidNumber {
        what,
        value: value.to_string(),
    })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;

        let command = match name.to_lowercase().as_str() {
            "toggle" | "t" => {
                let usage = "toggle <task id>";
                Command::Toggle(parse_number(words.next(), "task id", usage)?)
            }
            "dot" => {
                let usage = "dot <challenge id> <dot index>";
                let challenge_id = parse_number(words.next(), "challenge id", usage)?;
                let dot_index = parse_number(words.next(), "dot index", usage)?;
                Command::Dot { challenge_id, dot_index }
            }
            "log" => {
                let usage = "log <points> <date> <action...>";
                let points = parse_number(words.next(), "point value", usage)?;
                let date = words.next().ok_or(CommandError::Usage(usage))?;
                let action = words.collect::<Vec<_>>().join(" ");
                if action.is_empty() {
                    return Err(CommandError::Usage(usage));
                }
                Command::Log(NewActivity::new(action, points, date))
            }
            "level" => Command::Level(parse_number(words.next(), "level", "level <n>")?),
            "streak" => Command::Streak(parse_number(words.next(), "streak", "streak <n>")?),
            "status" | "s" => Command::Status,
            "tasks" => Command::Tasks,
            "done" => Command::Done,
            "activity" | "a" => Command::Activity,
            "progress" | "p" => Command::Progress,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}
