use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CimError>;

/// Which filter a name pattern is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
	/// Filter applied to class names.
	Class,
	/// Filter applied to property names.
	Property,
}

impl PatternKind {
	/// Lowercase label used in diagnostics.
	pub fn label(self) -> &'static str {
		match self {
			PatternKind::Class => "class",
			PatternKind::Property => "property",
		}
	}
}

/// Errors produced while connecting to and enumerating a management source.
#[derive(Debug, Error)]
pub enum CimError {
	/// Filter pattern failed to compile.
	#[error("invalid {} pattern: {source}", which.label())]
	InvalidPattern {
		/// Which filter the pattern was meant for.
		which: PatternKind,
		/// Underlying regex compile error.
		source: regex::Error,
	},
	/// Session establishment failed.
	#[error("could not connect to namespace {namespace}: {detail}")]
	Connect {
		/// Namespace id passed to connect.
		namespace: String,
		/// Service-reported failure detail.
		detail: String,
	},
	/// A paginated enumeration call failed.
	#[error("enumeration failed: {detail}")]
	Enumerate {
		/// Service-reported failure detail.
		detail: String,
	},
	/// A property value could not be retrieved.
	#[error("could not read property {property}: {detail}")]
	PropertyRead {
		/// Property name being read.
		property: String,
		/// Failure detail.
		detail: String,
	},
	/// Explicitly requested property does not exist on the object.
	#[error("property not found: {property}")]
	PropertyNotFound {
		/// Requested property name.
		property: String,
	},
	/// Scalar kind has no text coercion.
	#[error("value of kind {kind} has no text form")]
	ValueNotCoercible {
		/// Scalar kind label.
		kind: &'static str,
	},
	/// Dataset snapshot file could not be read.
	#[error("could not read dataset {path}: {source}")]
	DatasetIo {
		/// Dataset path.
		path: String,
		/// Underlying IO error.
		source: std::io::Error,
	},
	/// Dataset snapshot file could not be parsed.
	#[error("could not parse dataset {path}: {detail}")]
	DatasetParse {
		/// Dataset path.
		path: String,
		/// Parser-reported detail.
		detail: String,
	},
}
