use std::path::PathBuf;

use inquire::{InquireError, Text};

use crate::errors::EnvironmentError;

pub trait HandleInquireExitSignals<T> {
    fn handle_exit_signals(self) -> Result<Option<T>, InquireError>;
}

impl<T> HandleInquireExitSignals<T> for Result<T, InquireError> {
    fn handle_exit_signals(self) -> Result<Option<T>, InquireError> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(InquireError::OperationCanceled) => Ok(None),
            Err(InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Asks for the identifiers file. `None` when the user cancels the prompt.
pub fn prompt_identifiers_file() -> Result<Option<PathBuf>, EnvironmentError> {
    let path = Text::new("Identifiers file (.txt, one AppID per line):")
        .prompt()
        .handle_exit_signals()
        .map_err(|source| EnvironmentError::SpecificInputError {
            description: "identifiers file".to_string(),
            source,
        })?;
    Ok(path
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .map(PathBuf::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_signals_are_not_errors() {
        let canceled: Result<String, InquireError> = Err(InquireError::OperationCanceled);
        assert!(matches!(canceled.handle_exit_signals(), Ok(None)));

        let interrupted: Result<String, InquireError> = Err(InquireError::OperationInterrupted);
        assert!(matches!(interrupted.handle_exit_signals(), Ok(None)));

        let answered: Result<String, InquireError> = Ok("games.txt".to_string());
        assert!(matches!(answered.handle_exit_signals(), Ok(Some(p)) if p == "games.txt"));

        let failed: Result<String, InquireError> = Err(InquireError::NotTTY);
        assert!(failed.handle_exit_signals().is_err());
    }
}
