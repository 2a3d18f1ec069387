use std::fs;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use humansize::DECIMAL;

use crate::cmd_bmp::convert_to_bmp;
use crate::cmd_pal::convert_to_pal;
use crate::cmd_vh::convert_to_vh;
use crate::commands::{Cli, Commands};

mod cmd_bmp;
mod cmd_pal;
mod cmd_vh;
mod commands;
mod common;

fn main() -> ExitCode {
	// usage errors exit with 1 like every other failure, --help and --version with 0
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(e) => {
			let _ = e.print();
			return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
		}
	};

	let result = match &cli.command {
		Some(Commands::ToBmp(args)) => convert_to_bmp(args, cli.debug),
		Some(Commands::ToPal(args)) => convert_to_pal(args, cli.debug),
		Some(Commands::ToVh(args)) => convert_to_vh(args, cli.debug),
		None => {
			let _ = Cli::command().print_help();
			return ExitCode::FAILURE;
		}
	};

	match result {
		Ok(output) => {
			match fs::metadata(&output) {
				Ok(m) => {
					let size = humansize::format_size(m.len(), DECIMAL);
					println!("Output file size: {size}");
				}
				Err(err) => {
					eprintln!("Can't determine output file size: {err}");
				}
			}
			ExitCode::SUCCESS
		}
		Err(e) => {
			eprintln!("{} {e:#}", "Error:".red().bold());
			ExitCode::FAILURE
		}
	}
}
