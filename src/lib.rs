#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! sumcli — add two numbers from the command line.
//!
//! Ships two binaries over this library:
//!
//! - `float-sum <float1> <float2>` prints the sum with one fractional digit.
//! - `int-sum <num1> <num2>` prints the sum as a plain decimal integer.
//!
//! Operands are parsed leniently with C `atof`/`atoi` prefix semantics:
//! unparsable text is 0, trailing garbage is ignored. The only error is a
//! wrong argument count, reported as a usage line on stderr with exit code 1.

pub mod cli;
pub mod commands;
pub mod errors;
pub mod numeric;
