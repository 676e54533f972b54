//! Describes Discord client installs: the record shape, its validation, and finding installs on disk.

//Modules
mod filesystem;
mod functions;
mod implementations;
pub mod structures;

pub use crate::functions::{find_installs, is_openasar, merge_installs, parse_custom, parse_install, validate, validate_path};
pub use crate::structures::{Branch, Error, InstallRecord, InstallRecordBuilder, Platform, Scanner, ScannerBuilder, ValidationError};
