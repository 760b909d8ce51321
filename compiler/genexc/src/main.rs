//! `genexc` binary.

use clap::Parser;
use genexc::{init_tracing, run, Cli};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) => {
            if !report.output.is_empty() {
                println!("{}", report.output);
            }
            for diagnostic in &report.diagnostics {
                eprintln!("{diagnostic}");
            }
            if report.failed {
                std::process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    }
}
