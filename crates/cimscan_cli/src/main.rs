#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "cimscan", about = "Filtered enumeration of CIM-style management data snapshots")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Enumerate instances matching class and property filters.
	Scan(cmd::scan::Args),
	/// List classes and instance counts in a dataset.
	Classes(cmd::classes::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> cimscan::cim::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Scan(args) => cmd::scan::run(args),
		Commands::Classes(args) => cmd::classes::run(args),
	}
}
