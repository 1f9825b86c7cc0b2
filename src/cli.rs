/// CLI argument definitions via clap derive.
///
/// Both binaries take exactly two positional operands and nothing else. The
/// auto help/version flags are disabled and hyphen values are allowed so
/// that every token on the command line is an operand: `int-sum -1 1` adds,
/// it does not trip flag parsing.
use std::ffi::OsString;

use clap::Parser;

use crate::errors::SumError;

/// Arguments for `float-sum`.
#[derive(Debug, Parser)]
#[command(
    name = "float-sum",
    about = "Add two decimal numbers, printing one fractional digit",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct FloatSumArgs {
    /// First addend.
    #[arg(value_name = "float1", allow_hyphen_values = true)]
    pub left: String,

    /// Second addend.
    #[arg(value_name = "float2", allow_hyphen_values = true)]
    pub right: String,
}

/// Arguments for `int-sum`.
#[derive(Debug, Parser)]
#[command(
    name = "int-sum",
    about = "Add two integers, printing a plain decimal sum",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct IntSumArgs {
    /// First addend.
    #[arg(value_name = "num1", allow_hyphen_values = true)]
    pub left: String,

    /// Second addend.
    #[arg(value_name = "num2", allow_hyphen_values = true)]
    pub right: String,
}

/// Parse a full argv (including argv[0]) into `T`.
///
/// Any parse failure maps to a usage error naming the program as it was
/// invoked. With help/version disabled and hyphen values allowed, the only
/// reachable failure is a wrong operand count.
///
/// # Errors
///
/// Returns `SumError::WrongArgCount` unless exactly two operands are given.
pub fn parse_two<T: Parser>(
    argv: Vec<OsString>,
    left: &'static str,
    right: &'static str,
) -> Result<T, SumError> {
    let program = argv.first().map_or_else(
        || T::command().get_name().to_owned(),
        |arg0| arg0.to_string_lossy().into_owned(),
    );
    T::try_parse_from(argv).map_err(|_| SumError::WrongArgCount {
        program,
        left,
        right,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_two_operands_parse() {
        let args: FloatSumArgs =
            parse_two(argv(&["float-sum", "2.5", "3.25"]), "float1", "float2").unwrap();
        assert_eq!(args.left, "2.5");
        assert_eq!(args.right, "3.25");
    }

    #[test]
    fn test_hyphen_operands_are_values() {
        let args: IntSumArgs = parse_two(argv(&["int-sum", "-1", "1"]), "num1", "num2").unwrap();
        assert_eq!(args.left, "-1");
        assert_eq!(args.right, "1");
    }

    #[test]
    fn test_missing_operand_is_usage() {
        let result: Result<IntSumArgs, _> = parse_two(argv(&["int-sum", "2"]), "num1", "num2");
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Usage: int-sum <num1> <num2>");
    }

    #[test]
    fn test_extra_operand_is_usage() {
        let result: Result<FloatSumArgs, _> =
            parse_two(argv(&["./float-sum", "1", "2", "3"]), "float1", "float2");
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Usage: ./float-sum <float1> <float2>");
    }

    #[test]
    fn test_usage_names_argv0_as_invoked() {
        let result: Result<IntSumArgs, _> = parse_two(argv(&["/usr/bin/int-sum"]), "num1", "num2");
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Usage: /usr/bin/int-sum <num1> <num2>");
    }

    #[test]
    fn test_empty_argv_falls_back_to_command_name() {
        let result: Result<IntSumArgs, _> = parse_two(Vec::new(), "num1", "num2");
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Usage: int-sum <num1> <num2>");
    }
}
