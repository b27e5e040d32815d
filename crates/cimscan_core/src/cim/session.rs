use crate::cim::walker::walk_instances;
use crate::cim::{EnumerationResult, InstanceRecord, NamePattern, PatternKind, QueryService, Result};

/// Top-level enumeration entry point over one management source.
///
/// One value binds a service to a namespace id. Each [`Enumeration::run`]
/// acquires its own session and drops it before returning, on success
/// and failure alike. The call itself never fails: every error is
/// collapsed into the result's `error` field with empty instances.
#[derive(Debug)]
pub struct Enumeration<S> {
	service: S,
	namespace: String,
}

impl<S: QueryService> Enumeration<S> {
	/// Bind a service to the namespace every run connects to.
	pub fn new(service: S, namespace: impl Into<String>) -> Self {
		Self {
			service,
			namespace: namespace.into(),
		}
	}

	/// Run one filtered enumeration.
	///
	/// Pattern compilation, connection, and traversal failures all end
	/// up in the result's `error` field; any instances collected before
	/// a failure are discarded, never returned alongside the error.
	pub fn run(&self, class_pattern: &str, property_pattern: &str) -> EnumerationResult {
		match self.try_run(class_pattern, property_pattern) {
			Ok(instances) => EnumerationResult::ok(instances),
			Err(err) => EnumerationResult::failed(err.to_string()),
		}
	}

	fn try_run(&self, class_pattern: &str, property_pattern: &str) -> Result<Vec<InstanceRecord>> {
		// Both patterns must compile before the service is contacted.
		let class_filter = NamePattern::compile(PatternKind::Class, class_pattern)?;
		let property_filter = NamePattern::compile(PatternKind::Property, property_pattern)?;

		let session = self.service.connect(&self.namespace)?;
		walk_instances(&session, &class_filter, &property_filter)
	}
}
