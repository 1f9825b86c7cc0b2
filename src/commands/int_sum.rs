/// `int-sum`: add two integer operands, print a plain decimal sum.
use std::ffi::OsString;

use crate::cli::{self, IntSumArgs};
use crate::errors::SumError;
use crate::numeric::parse_int_lenient;

/// Run `int-sum` over a full argv (including argv[0]).
///
/// # Errors
///
/// Returns `SumError::WrongArgCount` unless exactly two operands are given.
pub fn run(argv: Vec<OsString>) -> Result<(), SumError> {
    let args: IntSumArgs = cli::parse_two(argv, "num1", "num2")?;
    println!("{}", render(&args.left, &args.right));
    Ok(())
}

/// Sum two lenient integer operands. Saturates on overflow, matching the
/// clamping parse.
#[must_use]
pub fn render(left: &str, right: &str) -> String {
    let sum = parse_int_lenient(left).saturating_add(parse_int_lenient(right));
    format!("{sum}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_operands() {
        assert_eq!(render("2", "3"), "5");
    }

    #[test]
    fn test_negative_cancels() {
        assert_eq!(render("-1", "1"), "0");
    }

    #[test]
    fn test_non_numeric_operand_is_zero() {
        assert_eq!(render("abc", "3"), "3");
    }

    #[test]
    fn test_prefix_parse() {
        assert_eq!(render("12abc", "3"), "15");
    }

    #[test]
    fn test_sum_saturates() {
        let max = i64::MAX.to_string();
        assert_eq!(render(&max, &max), i64::MAX.to_string());
    }
}
