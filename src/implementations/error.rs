use crate::structures::{Error, ValidationError};

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::IoError(error) => Some(error),
      Self::JsonError(error) => Some(error),
      Self::Validation(error) => Some(error),
      _ => None,
    }
  }
}

impl std::fmt::Display for Error {
  #[track_caller]
  #[inline(always)]
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Self::IoError(error) => write!(f, "I/O error: {}", error),
      Self::JsonError(error) => write!(f, "JSON error: {}", error),
      Self::InvalidJson(field, json) => write!(f, "Invalid JSON for field \"{}\": {}", field, json),
      Self::Validation(error) => write!(f, "{}", error),
      Self::NotAnInstall(path) => write!(f, "{} seems invalid, is it actually a Discord location?", path),
      Self::NoSearchRoots() => write!(f, "No directories to search for Discord installs"),
    }
  }
}

impl From<std::io::Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: std::io::Error) -> Self {
    log_error(&error);
    Self::IoError(error)
  }
}

impl From<json::Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: json::Error) -> Self {
    log_error(&error);
    Self::JsonError(error)
  }
}

impl From<ValidationError> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: ValidationError) -> Self {
    log_error(&error);
    Self::Validation(error)
  }
}

#[track_caller]
fn log_error(error: &(impl std::error::Error + ?Sized)) {
  tracing::error!("{:?}", error);
}
