use anyhow::Result;
use periodic_notes::{
	Granularity,
	config::Config,
	validation::{Complexity, PROBE_WINDOW, nesting_level, validate_format, validate_format_complexity},
};

/// Handles the validate command - checks a format string
pub fn handle_validate(config: &Config, format: &str, granularity: Granularity) -> Result<()> {
	let engine = config.engine();
	match validate_format(&engine, format, granularity) {
		Ok(()) if format.is_empty() => println!("Empty format: {granularity} notes use '{}'", granularity.default_format()),
		Ok(()) => println!("'{format}' is a valid {granularity} format"),
		Err(err) => anyhow::bail!("'{format}': {err}"),
	}
	Ok(())
}

/// Handles the complexity command - probes a format for repeating names
pub fn handle_complexity(config: &Config, format: &str, granularity: Granularity) -> Result<()> {
	let engine = config.engine();
	let complexity = validate_format_complexity(&engine, format, granularity);
	println!("{complexity}");

	match complexity {
		Complexity::Valid => {}
		Complexity::FragileBasename if nesting_level(format) > 1 => {
			eprintln!("Names repeat within {PROBE_WINDOW} periods; notes are told apart by their folders.");
		}
		Complexity::FragileBasename => {
			eprintln!(
				"Warning: names repeat within {PROBE_WINDOW} periods. Nest the format in folders (e.g. 'YYYY/{format}')."
			);
		}
		Complexity::LooseParsing => {
			eprintln!("Warning: '{format}' does not parse back into a {granularity}; notes cannot be found by name.");
		}
	}
	Ok(())
}
