mod collect;
mod error;
mod memory;
mod pattern;
mod record;
mod service;
mod session;
mod value;
mod walker;

/// Per-instance property collection.
pub use collect::collect_instance;
/// Error and result aliases.
pub use error::{CimError, PatternKind, Result};
/// Deterministic in-memory management source.
pub use memory::{Fault, MemoryClass, MemoryEnumerator, MemoryInstance, MemoryNamespace, MemoryObject, MemoryService, MemorySession};
/// Compiled full-match name filters.
pub use pattern::NamePattern;
/// Foreign-handle-free enumeration output types.
pub use record::{EnumerationResult, InstanceRecord, PropertyRecord};
/// Management-source access traits and pagination constants.
pub use service::{CLASS_NAME_PROPERTY, ObjectEnumerator, ObjectHandle, PAGE_SIZE, QueryService, Session};
/// Top-level enumeration entry point.
pub use session::Enumeration;
/// Property value representation and rendering.
pub use value::{RawValue, Scalar, render};
/// Paginated two-level class/instance traversal.
pub use walker::walk_instances;
