use crate::cim::{CLASS_NAME_PROPERTY, CimError, ObjectEnumerator, ObjectHandle, PAGE_SIZE, QueryService, RawValue, Result, Scalar, Session};

/// One instance snapshot: named raw values in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryInstance {
	/// Non-system properties in discovery order.
	pub properties: Vec<(Box<str>, RawValue)>,
}

impl MemoryInstance {
	/// Append one property, preserving insertion order.
	pub fn with(mut self, name: &str, value: RawValue) -> Self {
		self.properties.push((Box::from(name), value));
		self
	}
}

/// One class snapshot with its instances.
#[derive(Debug, Clone)]
pub struct MemoryClass {
	/// Class name.
	pub name: Box<str>,
	/// Instances in enumeration order.
	pub instances: Vec<MemoryInstance>,
}

impl MemoryClass {
	/// Create a class with no instances.
	pub fn new(name: &str) -> Self {
		Self {
			name: Box::from(name),
			instances: Vec::new(),
		}
	}

	/// Append one instance, preserving enumeration order.
	pub fn with_instance(mut self, instance: MemoryInstance) -> Self {
		self.instances.push(instance);
		self
	}
}

/// Namespace snapshot served by [`MemoryService`].
#[derive(Debug, Clone)]
pub struct MemoryNamespace {
	/// Namespace id expected by `connect`.
	pub name: Box<str>,
	/// Classes in enumeration order.
	pub classes: Vec<MemoryClass>,
}

impl MemoryNamespace {
	/// Create an empty namespace snapshot.
	pub fn new(name: &str) -> Self {
		Self {
			name: Box::from(name),
			classes: Vec::new(),
		}
	}

	/// Append one class, preserving enumeration order.
	pub fn with_class(mut self, class: MemoryClass) -> Self {
		self.classes.push(class);
		self
	}
}

/// Injected failure point for exercising error paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
	/// Fail the zero-based `page`-th class page read.
	ClassPage {
		/// Zero-based page index that fails.
		page: usize,
	},
	/// Fail the zero-based `page`-th instance page read for one class.
	InstancePage {
		/// Class whose instance enumeration fails.
		class: Box<str>,
		/// Zero-based page index that fails.
		page: usize,
	},
}

/// Deterministic in-memory management source.
///
/// Serves one namespace snapshot with real [`PAGE_SIZE`] pagination,
/// so page-boundary behavior is exercised exactly as against a live
/// source. Optional fault injection fails a chosen page read.
#[derive(Debug, Clone)]
pub struct MemoryService {
	namespace: MemoryNamespace,
	fault: Option<Fault>,
}

impl MemoryService {
	/// Serve `namespace` with no injected faults.
	pub fn new(namespace: MemoryNamespace) -> Self {
		Self { namespace, fault: None }
	}

	/// Serve `namespace`, failing at the injected fault point.
	pub fn with_fault(namespace: MemoryNamespace, fault: Fault) -> Self {
		Self {
			namespace,
			fault: Some(fault),
		}
	}
}

impl QueryService for MemoryService {
	type Session = MemorySession;

	fn connect(&self, namespace: &str) -> Result<MemorySession> {
		if namespace != self.namespace.name.as_ref() {
			return Err(CimError::Connect {
				namespace: namespace.to_owned(),
				detail: format!("this source serves {}", self.namespace.name),
			});
		}
		Ok(MemorySession {
			namespace: self.namespace.clone(),
			fault: self.fault.clone(),
		})
	}
}

/// Connected in-memory session.
#[derive(Debug)]
pub struct MemorySession {
	namespace: MemoryNamespace,
	fault: Option<Fault>,
}

impl Session for MemorySession {
	type Object = MemoryObject;
	type Enumerator = MemoryEnumerator;

	fn enumerate_classes(&self) -> Result<MemoryEnumerator> {
		let objects = self.namespace.classes.iter().map(|class| MemoryObject::class(class.name.clone())).collect();
		let fault_page = match &self.fault {
			Some(Fault::ClassPage { page }) => Some(*page),
			_ => None,
		};
		Ok(MemoryEnumerator::new(objects, fault_page))
	}

	fn enumerate_instances(&self, class_name: &str) -> Result<MemoryEnumerator> {
		let class = self
			.namespace
			.classes
			.iter()
			.find(|class| class.name.as_ref() == class_name)
			.ok_or_else(|| CimError::Enumerate {
				detail: format!("unknown class {class_name}"),
			})?;
		let objects = class
			.instances
			.iter()
			.map(|instance| MemoryObject::instance(class.name.clone(), instance.clone()))
			.collect();
		let fault_page = match &self.fault {
			Some(Fault::InstancePage { class: name, page }) if name.as_ref() == class_name => Some(*page),
			_ => None,
		};
		Ok(MemoryEnumerator::new(objects, fault_page))
	}
}

/// Forward-only paginated enumerator over in-memory objects.
#[derive(Debug)]
pub struct MemoryEnumerator {
	objects: Vec<MemoryObject>,
	page: usize,
	fault_page: Option<usize>,
}

impl MemoryEnumerator {
	fn new(mut objects: Vec<MemoryObject>, fault_page: Option<usize>) -> Self {
		// Pages are drained from the back; keep source order by reversing once.
		objects.reverse();
		Self {
			objects,
			page: 0,
			fault_page,
		}
	}
}

impl ObjectEnumerator for MemoryEnumerator {
	type Object = MemoryObject;

	fn next_page(&mut self) -> Result<Vec<MemoryObject>> {
		if self.fault_page == Some(self.page) {
			return Err(CimError::Enumerate {
				detail: format!("injected fault at page {}", self.page),
			});
		}
		self.page += 1;

		let take = self.objects.len().min(PAGE_SIZE);
		let mut page = Vec::with_capacity(take);
		for _ in 0..take {
			if let Some(object) = self.objects.pop() {
				page.push(object);
			}
		}
		Ok(page)
	}
}

/// One in-memory class or instance object.
#[derive(Debug, Clone)]
pub struct MemoryObject {
	class_name: Box<str>,
	properties: Vec<(Box<str>, RawValue)>,
	cursor: Option<usize>,
}

impl MemoryObject {
	fn class(name: Box<str>) -> Self {
		Self {
			class_name: name,
			properties: Vec::new(),
			cursor: None,
		}
	}

	fn instance(class_name: Box<str>, instance: MemoryInstance) -> Self {
		Self {
			class_name,
			properties: instance.properties,
			cursor: None,
		}
	}
}

impl ObjectHandle for MemoryObject {
	fn get_property(&self, name: &str) -> Result<RawValue> {
		if name == CLASS_NAME_PROPERTY {
			return Ok(RawValue::Scalar(Scalar::Str(self.class_name.clone())));
		}
		self.properties
			.iter()
			.find(|(key, _)| key.as_ref() == name)
			.map(|(_, value)| value.clone())
			.ok_or_else(|| CimError::PropertyNotFound { property: name.to_owned() })
	}

	fn begin_property_enumeration(&mut self) -> Result<()> {
		self.cursor = Some(0);
		Ok(())
	}

	fn next_property(&mut self) -> Result<Option<(Box<str>, RawValue)>> {
		let cursor = self.cursor.ok_or_else(|| CimError::Enumerate {
			detail: "property enumeration not started".to_owned(),
		})?;
		match self.properties.get(cursor) {
			Some((name, value)) => {
				self.cursor = Some(cursor + 1);
				Ok(Some((name.clone(), value.clone())))
			}
			None => Ok(None),
		}
	}
}
