use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, warn};

use crate::functions::parse_install;
use crate::structures::{Error, InstallRecord, Platform, ScannerBuilder};

/// Discord installs in the default locations of the current platform
pub async fn find_installs() -> Result<Vec<InstallRecord>, Error> {
  let scanner = ScannerBuilder::new().build()?;
  Ok(scanner.scan().await)
}

/// Installs directly below `root`, missing roots yield nothing
pub(crate) async fn scan_root(platform: Platform, root: &Path) -> Vec<InstallRecord> {
  let mut children = match fs::read_dir(root).await {
    Ok(children) => children,
    Err(error) => {
      if error.kind() != std::io::ErrorKind::NotFound {
        warn!("Error during readdir {}: {}", root.display(), error);
      }
      return vec![];
    }
  };

  let mut candidates: Vec<PathBuf> = vec![];
  loop {
    let child = match children.next_entry().await {
      Ok(Some(child)) => child,
      Ok(None) => break,
      Err(error) => {
        warn!("Error during readdir {}: {}", root.display(), error);
        break;
      }
    };
    let is_candidate = child.file_name().to_str().map(|name| platform.is_candidate(name)).unwrap_or(false);
    if !is_candidate || !child.file_type().await.map(|file_type| file_type.is_dir()).unwrap_or(false) {
      continue;
    }
    candidates.push(child.path());
  }
  candidates.sort();

  let mut installs = vec![];
  for candidate in candidates {
    if let Some(install) = parse_install(platform, &candidate).await {
      debug!("Found Discord install at {}", install.path());
      installs.push(install);
    }
  }
  installs
}
