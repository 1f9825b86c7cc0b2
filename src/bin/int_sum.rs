#![deny(clippy::all, clippy::pedantic)]
//! int-sum — add two integers, print a plain decimal sum.

fn main() {
    let argv: Vec<_> = std::env::args_os().collect();
    match sumcli::commands::int_sum::run(argv) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    }
}
