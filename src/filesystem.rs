use std::path::Path;

use tokio::fs;

pub(crate) async fn exists(path: &Path) -> bool {
  fs::metadata(path).await.is_ok()
}

pub(crate) async fn is_directory(path: &Path) -> bool {
  fs::metadata(path).await.map(|metadata| metadata.is_dir()).unwrap_or(false)
}
