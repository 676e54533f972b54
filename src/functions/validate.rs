use std::path::Path;

use crate::structures::{InstallRecord, ValidationError};

/// Checks the shape of a record, the branch is already guaranteed by its type
pub fn validate(record: &InstallRecord) -> Result<(), ValidationError> {
  validate_path(&record.path)?;
  if let Some(app_path) = &record.app_path {
    validate_path(app_path)?;
  }
  Ok(())
}

/// A path is well formed when it is non-empty, has no NUL bytes and is absolute
pub fn validate_path(path: &str) -> Result<(), ValidationError> {
  if path.trim().is_empty() || path.contains('\0') || !Path::new(path).is_absolute() {
    return Err(ValidationError::InvalidPath(path.to_string()));
  }
  Ok(())
}
