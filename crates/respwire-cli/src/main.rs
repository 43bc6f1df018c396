use std::process::ExitCode;

use clap::Parser;

mod commands;
mod config;
mod escape;

use config::Cli;

fn main() -> ExitCode {
	let cli = Cli::parse();
	if let Err(e) = telemetry::init(&cli.log_level) {
		eprintln!("Failed to initialize logging: {}", e);
		return ExitCode::FAILURE;
	}

	match commands::run(&cli) {
		Ok(output) => {
			println!("{}", output.trim_end());
			ExitCode::SUCCESS
		}
		Err(e) => {
			log::error!("{}", e);
			ExitCode::FAILURE
		}
	}
}
