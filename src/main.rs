mod cli;
mod commands;
mod domain;
mod error;
mod format;
mod git;
mod locate;
mod porcelain;
mod resolve;

use std::process;

use clap::Parser;

fn main() -> process::ExitCode {
    let cli = cli::Cli::parse();

    match commands::run(cli) {
        Ok(line) => {
            if !line.is_empty() {
                print!("{line}");
            }
            process::ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            e.code.into()
        }
    }
}
