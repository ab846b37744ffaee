pub mod assemble;
pub mod cli;
pub mod codegen;
pub mod error;
pub mod ir;
pub mod literal;
pub mod lower;
pub mod naming;
pub mod output;
pub mod path_de;
pub mod settings;
pub mod walker;

use std::process::ExitCode;

use colored::Colorize;

fn main() -> ExitCode {
    let command_line_interface = cli::CommandLineInterface::load();
    match command_line_interface.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{} {error:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
