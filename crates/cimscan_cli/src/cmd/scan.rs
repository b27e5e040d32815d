use std::path::PathBuf;

use cimscan::cim::{Enumeration, EnumerationResult, MemoryService, Result};
use serde::Serialize;

use crate::cmd::dataset;
use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Dataset snapshot to scan.
	pub dataset: PathBuf,
	/// Full-match filter on class names.
	#[arg(long = "class", default_value = ".*")]
	pub class_pattern: String,
	/// Full-match filter on property names.
	#[arg(long = "props", default_value = ".*")]
	pub property_pattern: String,
	#[arg(long)]
	pub json: bool,
}

/// Enumerate matching instances and print their filtered properties.
pub fn run(args: Args) -> Result<()> {
	let Args {
		dataset,
		class_pattern,
		property_pattern,
		json,
	} = args;

	let namespace = dataset::load(&dataset)?;
	let namespace_name = namespace.name.to_string();
	let enumeration = Enumeration::new(MemoryService::new(namespace), namespace_name);
	let result = enumeration.run(&class_pattern, &property_pattern);

	if json {
		emit_json(&ResultJson::from(&result));
		if result.error.is_some() {
			std::process::exit(1);
		}
		return Ok(());
	}

	if let Some(error) = &result.error {
		eprintln!("scan failed: {error}");
		std::process::exit(1);
	}

	for instance in &result.instances {
		println!("{}", instance.class_name);
		for property in &instance.properties {
			println!("  {} -> {}", property.name, property.value);
		}
	}

	Ok(())
}

#[derive(Serialize)]
struct ResultJson {
	error: Option<String>,
	instances: Vec<InstanceJson>,
}

#[derive(Serialize)]
struct InstanceJson {
	class_name: String,
	properties: Vec<PropertyJson>,
}

#[derive(Serialize)]
struct PropertyJson {
	name: String,
	value: String,
}

impl From<&EnumerationResult> for ResultJson {
	fn from(result: &EnumerationResult) -> Self {
		Self {
			error: result.error.clone(),
			instances: result
				.instances
				.iter()
				.map(|instance| InstanceJson {
					class_name: instance.class_name.to_string(),
					properties: instance
						.properties
						.iter()
						.map(|property| PropertyJson {
							name: property.name.to_string(),
							value: property.value.to_string(),
						})
						.collect(),
				})
				.collect(),
		}
	}
}
