use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::warn;

use crate::filesystem::{exists, is_directory};
use crate::functions::resources_patched;
use crate::structures::{Branch, InstallRecord, InstallRecordBuilder, Platform};

const FLATPAK_ID_PREFIX: &str = "com.discordapp.";

/// Inspects a single location using the layout of `platform`, None if it isn't a Discord install
pub async fn parse_install(platform: Platform, path: &Path) -> Option<InstallRecord> {
  match platform {
    Platform::Linux => parse_linux(path).await,
    Platform::Windows => parse_windows(path).await,
    Platform::MacOs => parse_macos(path).await,
  }
}

async fn parse_linux(path: &Path) -> Option<InstallRecord> {
  let name = path.file_name()?.to_str()?.to_owned();
  let path_str = path.to_str()?;

  let is_flatpak = path_str.contains("/flatpak/");
  let mut path = path.to_path_buf();
  if is_flatpak && !path_str.contains("/current/active/files") {
    let Some(binary_name) = flatpak_binary_name(&name) else {
      warn!("Tried to parse unknown flatpak: {}", path.display());
      return None;
    };
    path = path.join("current/active/files").join(binary_name);
  }

  let resources = path.join("resources");
  let is_patched = if is_directory(&resources).await {
    resources_patched(&resources).await
  } else if exists(&path.join("app.asar")).await {
    // system electron builds keep app.asar next to the binary
    exists(&path.join("_app.asar.unpacked")).await
  } else {
    warn!("Tried to parse invalid location: {}", path.display());
    return None;
  };

  build_record(&path, None, Branch::from_filename(&name), is_patched, is_flatpak)
}

/// `com.discordapp.DiscordCanary` -> `discord-canary`
fn flatpak_binary_name(flatpak_id: &str) -> Option<String> {
  let name = flatpak_id.strip_prefix(FLATPAK_ID_PREFIX)?.to_lowercase();
  match name.strip_prefix("discord") {
    Some(suffix) if !suffix.is_empty() => Some(format!("discord-{}", suffix)),
    _ => Some(name),
  }
}

async fn parse_windows(path: &Path) -> Option<InstallRecord> {
  let name = path.file_name()?.to_str()?.to_owned();

  let mut children = match fs::read_dir(path).await {
    Ok(children) => children,
    Err(error) => {
      if error.kind() != std::io::ErrorKind::NotFound {
        warn!("Error during readdir {}: {}", path.display(), error);
      }
      return None;
    }
  };

  let mut newest: Option<(String, PathBuf)> = None;
  loop {
    let child = match children.next_entry().await {
      Ok(Some(child)) => child,
      Ok(None) => break,
      Err(error) => {
        warn!("Error during readdir {}: {}", path.display(), error);
        break;
      }
    };
    if !child.file_type().await.map(|file_type| file_type.is_dir()).unwrap_or(false) {
      continue;
    }
    let Some(app_name) = child.file_name().to_str().map(str::to_owned) else {
      continue;
    };
    if !app_name.starts_with("app-") || !is_directory(&child.path().join("resources")).await {
      continue;
    }
    let is_newer = newest
      .as_ref()
      .map_or(true, |(newest_name, _)| compare_app_versions(&app_name, newest_name) == Ordering::Greater);
    if is_newer {
      newest = Some((app_name, child.path()));
    }
  }

  let Some((_, app_path)) = newest else {
    warn!("Tried to parse invalid location, no app directory: {}", path.display());
    return None;
  };
  let is_patched = resources_patched(&app_path.join("resources")).await;
  build_record(path, Some(&app_path), Branch::from_filename(&name), is_patched, false)
}

/// Orders `app-1.0.9` before `app-1.0.10`, falling back to plain string order
fn compare_app_versions(a: &str, b: &str) -> Ordering {
  fn version(name: &str) -> Option<Vec<u64>> {
    name.strip_prefix("app-")?.split('.').map(|part| part.parse().ok()).collect()
  }
  match (version(a), version(b)) {
    (Some(a_version), Some(b_version)) => a_version.cmp(&b_version).then_with(|| a.cmp(b)),
    _ => a.cmp(b),
  }
}

async fn parse_macos(path: &Path) -> Option<InstallRecord> {
  let name = path.file_name()?.to_str()?.to_owned();

  let resources = path.join("Contents").join("Resources");
  if !is_directory(&resources).await {
    warn!("Tried to parse invalid location: {}", path.display());
    return None;
  }

  let is_patched = resources_patched(&resources).await;
  build_record(path, None, Branch::from_filename(&name), is_patched, false)
}

/// Drops trailing separators and `.` components so one install always maps to one path
fn normalize(path: &Path) -> Option<String> {
  path.components().collect::<PathBuf>().to_str().map(str::to_owned)
}

fn build_record(path: &Path, app_path: Option<&Path>, branch: Branch, is_patched: bool, is_flatpak: bool) -> Option<InstallRecord> {
  let app_path = match app_path {
    Some(app_path) => Some(normalize(app_path)?),
    None => None,
  };
  let built = InstallRecordBuilder::new(normalize(path)?, branch)
    .set_app_path(app_path)
    .set_patched(is_patched)
    .set_flatpak(is_flatpak)
    .build();
  match built {
    Ok(record) => Some(record),
    Err(error) => {
      warn!("Skipping {}: {}", path.display(), error);
      None
    }
  }
}
