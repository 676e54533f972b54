/// Reasons an install record can fail validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
  /// Branch is not one of `Stable`, `Canary` or `PTB`, contains the rejected value
  InvalidBranch(String),
  /// `path` or `app_path` is empty or malformed, contains the rejected value
  InvalidPath(String),
}
