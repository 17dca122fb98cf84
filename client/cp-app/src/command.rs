use cp_core::FormField;

use std::str::FromStr;

use thiserror::Error;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: FormField, value: String },
    Submit,
    Register,
    Login,
    Edit,
    Logout,
    Cancel,
    Back,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Type a command (or 'help')")]
    Empty,

    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("Usage: set <field> <value>")]
    MissingField,

    #[error("{0}")]
    UnknownField(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (rest, ""),
                };
                if field.is_empty() {
                    return Err(CommandError::MissingField);
                }
                let field = field.parse().map_err(CommandError::UnknownField)?;
                Ok(Command::Set {
                    field,
                    value: value.to_string(),
                })
            }
            "submit" | "save" => Ok(Command::Submit),
            "register" => Ok(Command::Register),
            "login" => Ok(Command::Login),
            "edit" => Ok(Command::Edit),
            "logout" => Ok(Command::Logout),
            "cancel" => Ok(Command::Cancel),
            "back" => Ok(Command::Back),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

pub const HELP: &str = "\
Commands:
  set <field> <value>   fill a form field (name, email, password, confirm, degree, year)
  submit                submit the current form
  register              open the registration form
  login                 back to sign in
  edit                  edit your profile
  logout                sign out
  cancel                discard profile edits
  back                  previous screen
  help                  this text
  quit                  exit";
