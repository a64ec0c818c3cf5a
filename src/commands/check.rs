use std::path::Path;

use anyhow::Result;
use periodic_notes::{
	Granularity,
	calendar::DateEngine,
	config::{Config, PeriodConfig},
	validation::{
		Complexity, nesting_level, validate_folder, validate_format, validate_format_complexity, validate_template,
	},
	vault::Vault,
};
use serde::Serialize;

use super::open_vault;

/// Validation outcome for one enabled period.
#[derive(Debug, Serialize)]
struct PeriodReport {
	granularity:    Granularity,
	format:         String,
	format_error:   Option<String>,
	complexity:     Complexity,
	folder_error:   Option<String>,
	template_error: Option<String>,
	warning:        Option<String>,
}

impl PeriodReport {
	fn new(engine: &impl DateEngine, vault: &impl Vault, granularity: Granularity, period: &PeriodConfig) -> Self {
		let format = period.effective_format(granularity).to_string();
		let complexity = validate_format_complexity(engine, &format, granularity);
		let warning = (complexity == Complexity::FragileBasename && nesting_level(&format) == 1)
			.then(|| "Names repeat across periods and the format has no folders to tell them apart".to_string());

		Self {
			granularity,
			format_error: validate_format(engine, &format, granularity).err().map(|e| e.to_string()),
			complexity,
			folder_error: validate_folder(vault, &period.folder).err().map(|e| e.to_string()),
			template_error: validate_template(vault, &period.template).err().map(|e| e.to_string()),
			warning,
			format,
		}
	}

	fn problems(&self) -> usize {
		[&self.format_error, &self.folder_error, &self.template_error].iter().filter(|e| e.is_some()).count()
			+ usize::from(self.complexity == Complexity::LooseParsing)
	}
}

/// Handles the check command - validates every enabled period against the
/// vault
pub fn handle_check(config: &Config, vault_root: Option<&Path>, json: bool) -> Result<()> {
	let vault = open_vault(vault_root)?;
	let engine = config.engine();

	let reports: Vec<PeriodReport> =
		config.enabled_periods().map(|(g, period)| PeriodReport::new(&engine, &vault, g, period)).collect();

	if json {
		println!("{}", serde_json::to_string_pretty(&reports)?);
	} else if reports.is_empty() {
		println!("No periodic notes enabled.");
	} else {
		print_reports(&reports);
	}

	let problems: usize = reports.iter().map(PeriodReport::problems).sum();
	if problems > 0 {
		anyhow::bail!("{problems} problem(s) found");
	}
	Ok(())
}

fn print_reports(reports: &[PeriodReport]) {
	for report in reports {
		println!("\n[{}] {}", report.granularity, report.format);
		println!("  Complexity: {}", report.complexity);
		for (label, error) in
			[("Format", &report.format_error), ("Folder", &report.folder_error), ("Template", &report.template_error)]
		{
			println!("  {label}: {}", error.as_deref().unwrap_or("ok"));
		}
		if let Some(warning) = &report.warning {
			println!("  Warning: {warning}");
		}
	}
}
