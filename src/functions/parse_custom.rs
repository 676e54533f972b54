use std::path::Path;

use tracing::info;

use crate::functions::{parse_install, validate_path};
use crate::structures::{Error, InstallRecord, Platform};

/// Turns a location the user picked by hand into a record marked as custom
pub async fn parse_custom(platform: Platform, path: &str) -> Result<InstallRecord, Error> {
  validate_path(path)?;
  let record = parse_install(platform, Path::new(path))
    .await
    .ok_or_else(|| Error::NotAnInstall(path.to_string()))?;
  info!("Adding custom Discord install at {}", record.path());
  Ok(InstallRecord {
    custom: true,
    ..record
  })
}
