use std::path::PathBuf;

use futures::future::join_all;

use crate::functions::scan_root;
use crate::structures::{Error, InstallRecord, Platform, Scanner, ScannerBuilder};

impl ScannerBuilder {
  pub fn new() -> Self {
    Self {
      platform: Platform::current(),
      search_roots: Vec::new(),
    }
  }

  pub fn set_platform(mut self, platform: Platform) -> Self {
    self.platform = platform;
    self
  }

  pub fn add_search_root(mut self, search_root: PathBuf) -> Self {
    self.search_roots.push(search_root);
    self
  }

  pub fn set_search_roots(mut self, search_roots: Vec<PathBuf>) -> Self {
    self.search_roots = search_roots;
    self
  }

  /// Falls back to the platform's default locations when no search root was given
  pub fn build(self) -> Result<Scanner, Error> {
    self.build_with_defaults(|platform| platform.default_search_roots())
  }

  pub(crate) fn build_with_defaults(self, defaults: impl FnOnce(Platform) -> Vec<PathBuf>) -> Result<Scanner, Error> {
    let search_roots = if self.search_roots.is_empty() {
      defaults(self.platform)
    } else {
      self.search_roots
    };
    if search_roots.is_empty() {
      return Err(Error::NoSearchRoots());
    }
    Ok(Scanner {
      platform: self.platform,
      search_roots,
    })
  }
}

impl Default for ScannerBuilder {
  fn default() -> Self {
    Self::new()
  }
}

impl Scanner {
  pub fn platform(&self) -> Platform {
    self.platform
  }

  pub fn search_roots(&self) -> &[PathBuf] {
    &self.search_roots
  }

  /// Installs below every search root, in the order the roots were given
  pub async fn scan(&self) -> Vec<InstallRecord> {
    tracing::info!("Searching {} directories for Discord installs", self.search_roots.len());
    join_all(self.search_roots.iter().map(|root| scan_root(self.platform, root)))
      .await
      .into_iter()
      .flatten()
      .collect()
  }
}
