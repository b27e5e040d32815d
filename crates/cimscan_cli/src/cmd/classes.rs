use std::path::PathBuf;

use cimscan::cim::{NamePattern, PatternKind, Result};
use serde::Serialize;

use crate::cmd::dataset;
use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Dataset snapshot to inspect.
	pub dataset: PathBuf,
	/// Full-match filter on class names.
	#[arg(long = "class", default_value = ".*")]
	pub class_pattern: String,
	#[arg(long)]
	pub json: bool,
}

/// List classes in a dataset with their instance counts.
pub fn run(args: Args) -> Result<()> {
	let Args {
		dataset,
		class_pattern,
		json,
	} = args;

	let namespace = dataset::load(&dataset)?;
	let filter = NamePattern::compile(PatternKind::Class, &class_pattern)?;

	let mut rows = Vec::new();
	for class in &namespace.classes {
		if filter.matches(&class.name) {
			rows.push((class.name.to_string(), class.instances.len()));
		}
	}

	if json {
		let payload = ClassesJson {
			namespace: namespace.name.to_string(),
			classes: rows
				.into_iter()
				.map(|(name, instance_count)| ClassCountJson { name, instance_count })
				.collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("namespace: {}", namespace.name);
	for (name, count) in rows {
		println!("  {name}: {count}");
	}

	Ok(())
}

#[derive(Serialize)]
struct ClassesJson {
	namespace: String,
	classes: Vec<ClassCountJson>,
}

#[derive(Serialize)]
struct ClassCountJson {
	name: String,
	instance_count: usize,
}
