#![deny(clippy::all, clippy::pedantic)]
//! float-sum — add two decimal numbers, print with one fractional digit.

fn main() {
    let argv: Vec<_> = std::env::args_os().collect();
    match sumcli::commands::float_sum::run(argv) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    }
}
