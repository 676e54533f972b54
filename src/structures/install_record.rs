use crate::structures::Branch;

/// One installation of the Discord client on this machine.
///
/// Fields are read through accessors; a change in install state is expressed by creating a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRecord {
  /// Root install directory
  pub(crate) path: String,
  /// Directory of the versioned app, only known on layouts that keep one apart from `path`
  pub(crate) app_path: Option<String>,
  pub(crate) branch: Branch,
  /// Whether the install has been modified from stock
  pub(crate) is_patched: bool,
  pub(crate) is_flatpak: bool,
  /// Added by hand rather than discovered
  pub(crate) custom: bool,
}

pub struct InstallRecordBuilder {
  pub(crate) path: String,
  pub(crate) app_path: Option<String>,
  pub(crate) branch: Branch,
  pub(crate) is_patched: bool,
  pub(crate) is_flatpak: bool,
  pub(crate) custom: bool,
}
