//! Command-line interface for periodic-notes.
//!
//! Provides commands for checking note formats and settings:
//! - validate: Check that a format is a legal, round-tripping filename
//! - complexity: Probe a format for names that repeat across periods
//! - resolve: Work out which period an existing note file represents
//! - check: Validate every enabled period in the configuration
//! - config: Generate or show the configuration file

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use periodic_notes::Granularity;

/// Main CLI structure parsed by clap.
#[derive(Parser)]
#[command(name = "periodic-notes")]
#[command(about = "Validate periodic note formats and resolve note dates", long_about = None)]
pub struct Cli {
	/// Vault folder (overrides the configured root)
	#[arg(long, global = true)]
	pub vault: Option<PathBuf>,

	/// Show debug logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
	/// Check a format for illegal characters and, for days, a clean round trip
	Validate {
		format:      String,
		/// Period the format names
		#[arg(short, long, value_enum, default_value_t = GranularityArg::Day)]
		granularity: GranularityArg,
	},
	/// Probe a format for names that repeat within 1000 periods
	Complexity {
		format:      String,
		/// Period the format names
		#[arg(short, long, value_enum, default_value_t = GranularityArg::Day)]
		granularity: GranularityArg,
	},
	/// Show the date key and period for an existing note file
	Resolve {
		/// Note path, relative to the vault or inside it
		file:        String,
		/// Period the note belongs to
		#[arg(short, long, value_enum, default_value_t = GranularityArg::Day)]
		granularity: GranularityArg,
		/// Format to resolve with (defaults to the configured one)
		#[arg(short, long)]
		format:      Option<String>,
	},
	/// Validate formats, templates and folders of every enabled period
	Check {
		/// Print the report as JSON
		#[arg(long)]
		json: bool,
	},
	/// Generate default config file or show current config
	Config {
		/// Show current configuration instead of generating
		#[arg(short, long)]
		show: bool,
	},
}

/// Period names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GranularityArg {
	Day,
	Week,
	Month,
	Quarter,
	Year,
}

impl From<GranularityArg> for Granularity {
	fn from(arg: GranularityArg) -> Self {
		match arg {
			GranularityArg::Day => Self::Day,
			GranularityArg::Week => Self::Week,
			GranularityArg::Month => Self::Month,
			GranularityArg::Quarter => Self::Quarter,
			GranularityArg::Year => Self::Year,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn granularity_flag_maps_to_period() {
		let cli = Cli::try_parse_from(["periodic-notes", "complexity", "[W]ww", "--granularity", "week"]).unwrap();
		let Commands::Complexity { granularity, .. } = cli.command else {
			panic!("expected the complexity command");
		};
		assert_eq!(Granularity::from(granularity), Granularity::Week);

		let cli = Cli::try_parse_from(["periodic-notes", "validate", "YYYY"]).unwrap();
		let Commands::Validate { granularity, .. } = cli.command else {
			panic!("expected the validate command");
		};
		assert_eq!(Granularity::from(granularity), Granularity::Day);
	}
}
