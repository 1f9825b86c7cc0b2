/// `float-sum`: add two decimal operands, print with one fractional digit.
use std::ffi::OsString;

use crate::cli::{self, FloatSumArgs};
use crate::errors::SumError;
use crate::numeric::parse_float_lenient;

/// Run `float-sum` over a full argv (including argv[0]).
///
/// # Errors
///
/// Returns `SumError::WrongArgCount` unless exactly two operands are given.
pub fn run(argv: Vec<OsString>) -> Result<(), SumError> {
    let args: FloatSumArgs = cli::parse_two(argv, "float1", "float2")?;
    println!("{}", render(&args.left, &args.right));
    Ok(())
}

/// Sum two lenient decimal operands and format with one fractional digit.
#[must_use]
pub fn render(left: &str, right: &str) -> String {
    let sum = parse_float_lenient(left) + parse_float_lenient(right);
    format!("{sum:.1}")
}
