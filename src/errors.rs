/// Errors surfaced by the summation binaries.
use thiserror::Error;

/// Errors that can occur while running a summation command.
///
/// Malformed numeric text is deliberately not represented here: operands are
/// coerced leniently (see [`crate::numeric`]), so the command line itself is
/// the only thing that can be wrong.
#[derive(Debug, Error)]
pub enum SumError {
    /// The command line did not carry exactly two operands.
    #[error("Usage: {program} <{left}> <{right}>")]
    WrongArgCount {
        /// The program name as invoked (argv[0]).
        program: String,
        /// Placeholder name of the first operand in the usage line.
        left: &'static str,
        /// Placeholder name of the second operand in the usage line.
        right: &'static str,
    },
}

/// Exit code mapping for `SumError` variants.
impl SumError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::WrongArgCount { .. } => 1,
        }
    }
}
