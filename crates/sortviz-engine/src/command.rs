//! Commands a frame loop can send to the driver.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// A request delivered to [`LockstepDriver`](crate::LockstepDriver) and
/// applied at the start of the next tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DriverCommand {
    /// Shuffle the dataset again and replace the engine.
    Reshuffle,
    /// Stop the run. Every later tick reports
    /// [`TickOutcome::Quit`](crate::TickOutcome::Quit).
    Quit,
}

/// Text that does not name a [`DriverCommand`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseCommandError {
    /// The rejected input, trimmed.
    pub input: String,
}

impl fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown command '{}' (expected s/shuffle or q/quit)",
            self.input
        )
    }
}

impl Error for ParseCommandError {}

impl FromStr for DriverCommand {
    type Err = ParseCommandError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "s" | "shuffle" | "reshuffle" => Ok(Self::Reshuffle),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            _ => Err(ParseCommandError {
                input: trimmed.to_string(),
            }),
        }
    }
}

impl fmt::Display for DriverCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reshuffle => write!(f, "reshuffle"),
            Self::Quit => write!(f, "quit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!("s".parse(), Ok(DriverCommand::Reshuffle));
        assert_eq!("Shuffle\n".parse(), Ok(DriverCommand::Reshuffle));
        assert_eq!("  q ".parse(), Ok(DriverCommand::Quit));
        assert_eq!("QUIT".parse(), Ok(DriverCommand::Quit));
    }

    #[test]
    fn rejects_unknown_text() {
        let err = " sort ".parse::<DriverCommand>().unwrap_err();
        assert_eq!(err.input, "sort");
        assert!(err.to_string().contains("unknown command 'sort'"));
        assert!("".parse::<DriverCommand>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for cmd in [DriverCommand::Reshuffle, DriverCommand::Quit] {
            assert_eq!(cmd.to_string().parse(), Ok(cmd));
        }
    }
}
