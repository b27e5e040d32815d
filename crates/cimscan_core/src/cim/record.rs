/// One rendered property of one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRecord {
	/// Property name as discovered; duplicates across inheritance levels are possible.
	pub name: Box<str>,
	/// Canonical display text of the property value.
	pub value: Box<str>,
}

/// One flattened instance with its filtered properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceRecord {
	/// Class name read from the instance's system metadata.
	pub class_name: Box<str>,
	/// Matching properties in discovery order.
	pub properties: Vec<PropertyRecord>,
}

/// Final enumeration output, free of foreign handles.
///
/// When `error` is present `instances` is empty; a failed run never
/// returns partial output. The value is plain owned text throughout,
/// so its lifetime is fully decoupled from any session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationResult {
	/// Human-readable failure message, absent on success.
	pub error: Option<String>,
	/// Flattened instances in traversal order.
	pub instances: Vec<InstanceRecord>,
}

impl EnumerationResult {
	/// Build a successful result from accumulated instances.
	pub fn ok(instances: Vec<InstanceRecord>) -> Self {
		Self { error: None, instances }
	}

	/// Build a failed result, discarding any accumulated instances.
	pub fn failed(error: impl Into<String>) -> Self {
		Self {
			error: Some(error.into()),
			instances: Vec::new(),
		}
	}

	/// Return `true` when the enumeration completed without error.
	pub fn is_ok(&self) -> bool {
		self.error.is_none()
	}
}
