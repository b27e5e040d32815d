//! Public library API for filtered enumeration of CIM-style management data.

/// Class/instance/property traversal, value rendering, and result types.
pub mod cim;
