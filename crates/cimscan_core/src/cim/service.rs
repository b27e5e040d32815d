use crate::cim::{RawValue, Result};

/// Upper bound on objects returned by one paginated call.
pub const PAGE_SIZE: usize = 128;

/// System property holding an object's class name.
pub const CLASS_NAME_PROPERTY: &str = "__CLASS";

/// Entry point into a management source.
pub trait QueryService {
	/// Connected session type.
	type Session: Session;

	/// Establish a session against the namespace named by `namespace`.
	fn connect(&self, namespace: &str) -> Result<Self::Session>;
}

/// One connected namespace session.
///
/// A session is single-caller: the enumeration core never shares one
/// across threads or interleaves runs on it. Dropping the session
/// releases the underlying connection.
pub trait Session {
	/// Object handle type yielded by this session's enumerators.
	type Object: ObjectHandle;
	/// Paginated enumerator type.
	type Enumerator: ObjectEnumerator<Object = Self::Object>;

	/// Open a forward-only enumerator over every class in the namespace.
	fn enumerate_classes(&self) -> Result<Self::Enumerator>;

	/// Open a forward-only enumerator over instances of one class.
	fn enumerate_instances(&self, class_name: &str) -> Result<Self::Enumerator>;
}

/// Forward-only paginated object enumerator.
pub trait ObjectEnumerator {
	/// Object handle type.
	type Object: ObjectHandle;

	/// Return the next page of at most [`PAGE_SIZE`] objects.
	///
	/// An empty page means the enumerator is exhausted; callers stop
	/// there and do not call again.
	fn next_page(&mut self) -> Result<Vec<Self::Object>>;
}

/// One class or instance object held open on the management source.
///
/// Handles are exclusively owned: moved when ownership transfers,
/// never shared, never stored in enumeration output. Dropping the
/// handle releases the foreign object.
pub trait ObjectHandle {
	/// Read one property by name, system properties included.
	fn get_property(&self, name: &str) -> Result<RawValue>;

	/// Enter property enumeration over non-system properties only.
	fn begin_property_enumeration(&mut self) -> Result<()>;

	/// Return the next discovered property, or `None` when exhausted.
	fn next_property(&mut self) -> Result<Option<(Box<str>, RawValue)>>;
}
