use crate::structures::ValidationError;

impl std::error::Error for ValidationError { }

impl std::fmt::Display for ValidationError {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Self::InvalidBranch(branch) => write!(f, "\"{}\" is not a Discord branch, expected Stable, Canary or PTB", branch),
      Self::InvalidPath(path) => write!(f, "\"{}\" is not a valid install path", path),
    }
  }
}
