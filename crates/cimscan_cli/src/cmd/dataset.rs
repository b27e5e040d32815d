use std::path::Path;

use cimscan::cim::{CimError, MemoryClass, MemoryInstance, MemoryNamespace, RawValue, Result, Scalar};
use serde::Deserialize;

/// Top-level dataset file: one namespace snapshot.
#[derive(Debug, Deserialize)]
pub struct DatasetJson {
	/// Namespace id the snapshot was captured from.
	pub namespace: String,
	/// Classes in capture order.
	pub classes: Vec<ClassJson>,
}

/// One class snapshot.
#[derive(Debug, Deserialize)]
pub struct ClassJson {
	/// Class name.
	pub name: String,
	/// Instances in capture order.
	#[serde(default)]
	pub instances: Vec<InstanceJson>,
}

/// One instance snapshot.
#[derive(Debug, Deserialize)]
pub struct InstanceJson {
	/// Non-system properties in capture order.
	#[serde(default)]
	pub properties: Vec<PropertyJson>,
}

/// One named property value.
#[derive(Debug, Deserialize)]
pub struct PropertyJson {
	/// Property name.
	pub name: String,
	/// Property value.
	pub value: ValueJson,
}

/// Property value encoding in dataset files.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ValueJson {
	/// Property exists without a value.
	Empty,
	/// Explicit null.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	I64(i64),
	/// Unsigned integer scalar.
	U64(u64),
	/// 64-bit float scalar.
	F64(f64),
	/// Text scalar.
	String(String),
	/// Datetime text in its source encoding.
	Datetime(String),
	/// Embedded object with no text form.
	Object,
	/// Ordered sequence of scalar values.
	Array(Vec<ValueJson>),
}

impl ValueJson {
	fn into_raw(self, path: &str) -> Result<RawValue> {
		Ok(match self {
			ValueJson::Empty => RawValue::Empty,
			ValueJson::Null => RawValue::Null,
			ValueJson::Array(items) => {
				let mut elements = Vec::with_capacity(items.len());
				for item in items {
					elements.push(item.into_scalar(path)?);
				}
				RawValue::Array(elements)
			}
			scalar => RawValue::Scalar(scalar.into_scalar(path)?),
		})
	}

	fn into_scalar(self, path: &str) -> Result<Scalar> {
		Ok(match self {
			ValueJson::Bool(value) => Scalar::Bool(value),
			ValueJson::I64(value) => Scalar::I64(value),
			ValueJson::U64(value) => Scalar::U64(value),
			ValueJson::F64(value) => Scalar::F64(value),
			ValueJson::String(value) => Scalar::Str(value.into_boxed_str()),
			ValueJson::Datetime(value) => Scalar::DateTime(value.into_boxed_str()),
			ValueJson::Object => Scalar::Object,
			ValueJson::Empty | ValueJson::Null | ValueJson::Array(_) => {
				return Err(CimError::DatasetParse {
					path: path.to_owned(),
					detail: "array elements must be scalar values".to_owned(),
				});
			}
		})
	}
}

/// Load a dataset file into an in-memory namespace snapshot.
pub fn load(path: &Path) -> Result<MemoryNamespace> {
	let path_label = path.display().to_string();

	let text = std::fs::read_to_string(path).map_err(|source| CimError::DatasetIo {
		path: path_label.clone(),
		source,
	})?;
	let dataset: DatasetJson = serde_json::from_str(&text).map_err(|err| CimError::DatasetParse {
		path: path_label.clone(),
		detail: err.to_string(),
	})?;

	let mut namespace = MemoryNamespace::new(&dataset.namespace);
	for class in dataset.classes {
		let mut memory_class = MemoryClass::new(&class.name);
		for instance in class.instances {
			let mut memory_instance = MemoryInstance::default();
			for property in instance.properties {
				let value = property.value.into_raw(&path_label)?;
				memory_instance = memory_instance.with(&property.name, value);
			}
			memory_class = memory_class.with_instance(memory_instance);
		}
		namespace = namespace.with_class(memory_class);
	}
	Ok(namespace)
}

#[cfg(test)]
mod tests {
	use cimscan::cim::{CimError, RawValue, Scalar};

	use crate::cmd::dataset::ValueJson;

	#[test]
	fn scalar_values_convert_to_raw() {
		let value: ValueJson = serde_json::from_str(r#"{ "kind": "u64", "value": 42 }"#).expect("value parses");
		assert_eq!(value.into_raw("test").expect("converts"), RawValue::Scalar(Scalar::U64(42)));

		let value: ValueJson = serde_json::from_str(r#"{ "kind": "null" }"#).expect("value parses");
		assert_eq!(value.into_raw("test").expect("converts"), RawValue::Null);
	}

	#[test]
	fn arrays_convert_element_wise() {
		let value: ValueJson = serde_json::from_str(
			r#"{ "kind": "array", "value": [ { "kind": "string", "value": "a" }, { "kind": "string", "value": "b" } ] }"#,
		)
		.expect("value parses");
		assert_eq!(
			value.into_raw("test").expect("converts"),
			RawValue::Array(vec![Scalar::Str(Box::from("a")), Scalar::Str(Box::from("b"))])
		);
	}

	#[test]
	fn nested_array_elements_are_rejected() {
		let value: ValueJson = serde_json::from_str(r#"{ "kind": "array", "value": [ { "kind": "array", "value": [] } ] }"#).expect("value parses");
		let err = value.into_raw("test").expect_err("nested arrays are not scalars");
		match err {
			CimError::DatasetParse { path, .. } => assert_eq!(path, "test"),
			other => panic!("unexpected error: {other}"),
		}
	}
}
