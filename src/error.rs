//=========================================================================
// Error Types
//=========================================================================
//
// Crate-wide error type and `Result` alias.
//
// The game core itself has no recoverable errors: every transition is a
// total function. Errors only arise while constructing the question bank
// or while the runtime shell talks to the terminal.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Result Alias ========================================================

/// Result type alias for Ximera operations.
pub type Result<T> = std::result::Result<T, XimeraError>;

//=== XimeraError =========================================================

/// Errors produced while building or running the game.
#[derive(Error, Debug)]
pub enum XimeraError {
    /// The question bank was asked to generate layers from an empty pool.
    #[error("question template pool is empty")]
    EmptyTemplatePool,

    /// A template names a correct option that does not exist.
    #[error("template '{topic}' marks option {correct} as correct but only has {options} options")]
    InvalidTemplate {
        topic: String,
        correct: usize,
        options: usize,
    },

    /// Terminal I/O failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The core logic thread panicked before shutdown completed.
    #[error("core logic thread panicked")]
    CoreThreadPanicked,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<XimeraError>();
    }

    #[test]
    fn invalid_template_message_names_topic() {
        let err = XimeraError::InvalidTemplate {
            topic: "NLP".to_string(),
            correct: 7,
            options: 4,
        };
        let message = err.to_string();
        assert!(message.contains("NLP"));
        assert!(message.contains('7'));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: XimeraError = io.into();
        assert!(matches!(err, XimeraError::Io(_)));
    }
}
