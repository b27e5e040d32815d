/// Class listing command.
pub mod classes;
/// Dataset snapshot loading shared by commands.
pub mod dataset;
/// Instance enumeration command.
pub mod scan;
/// Shared output helpers.
pub mod util;
