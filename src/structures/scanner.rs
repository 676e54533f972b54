use std::path::PathBuf;

use crate::structures::Platform;

/// Looks for Discord installs below a set of search roots
#[derive(Debug, Clone)]
pub struct Scanner {
  pub(crate) platform: Platform,
  pub(crate) search_roots: Vec<PathBuf>,
}

pub struct ScannerBuilder {
  pub(crate) platform: Platform,
  pub(crate) search_roots: Vec<PathBuf>,
}
