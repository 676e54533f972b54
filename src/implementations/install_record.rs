use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use json::JsonValue;
use sha2::{Digest, Sha256};

use crate::functions::validate;
use crate::structures::{Branch, Error, InstallRecord, InstallRecordBuilder, ValidationError};

impl InstallRecordBuilder {
  pub fn new(path: String, branch: Branch) -> Self {
    Self {
      path,
      app_path: None,
      branch,
      is_patched: false,
      is_flatpak: false,
      custom: false,
    }
  }

  pub fn set_app_path(mut self, app_path: Option<String>) -> Self {
    self.app_path = app_path;
    self
  }

  pub fn set_patched(mut self, is_patched: bool) -> Self {
    self.is_patched = is_patched;
    self
  }

  pub fn set_flatpak(mut self, is_flatpak: bool) -> Self {
    self.is_flatpak = is_flatpak;
    self
  }

  pub fn set_custom(mut self, custom: bool) -> Self {
    self.custom = custom;
    self
  }

  /// Builds the record, rejecting it if it doesn't validate
  pub fn build(self) -> Result<InstallRecord, ValidationError> {
    let record = InstallRecord {
      path: self.path,
      app_path: self.app_path,
      branch: self.branch,
      is_patched: self.is_patched,
      is_flatpak: self.is_flatpak,
      custom: self.custom,
    };
    validate(&record)?;
    Ok(record)
  }
}

impl InstallRecord {
  pub fn path(&self) -> &str {
    &self.path
  }

  pub fn app_path(&self) -> Option<&str> {
    self.app_path.as_deref()
  }

  pub fn branch(&self) -> Branch {
    self.branch
  }

  pub fn is_patched(&self) -> bool {
    self.is_patched
  }

  pub fn is_flatpak(&self) -> bool {
    self.is_flatpak
  }

  /// Whether the user added this install by hand
  pub fn is_custom(&self) -> bool {
    self.custom
  }

  pub fn validate(&self) -> Result<(), ValidationError> {
    validate(self)
  }

  /// A replacement record for the same install with a different patch state
  pub fn with_patched(&self, is_patched: bool) -> Self {
    Self {
      is_patched,
      ..self.clone()
    }
  }

  /// Stable identifier of the install, the SHA256 of its path
  pub fn id(&self) -> String {
    hex::encode_upper(Sha256::digest(self.path.as_bytes()))
  }

  /// Directory holding the `app.asar` of this install
  pub fn resources_dir(&self) -> PathBuf {
    if let Some(app_path) = &self.app_path {
      return Path::new(app_path).join("resources");
    }
    let path = Path::new(&self.path);
    if path.extension() == Some(OsStr::new("app")) {
      path.join("Contents").join("Resources")
    } else {
      path.join("resources")
    }
  }

  pub fn to_json(&self) -> JsonValue {
    let mut data = JsonValue::new_object();
    data["path"] = self.path.as_str().into();
    if let Some(app_path) = &self.app_path {
      data["app_path"] = app_path.as_str().into();
    }
    data["branch"] = self.branch.as_str().into();
    data["is_patched"] = self.is_patched.into();
    data["is_flatpak"] = self.is_flatpak.into();
    data["custom"] = self.custom.into();
    data
  }

  /// Reads a record from its json shape, validating it on the way
  pub fn from_json(json: &JsonValue) -> Result<Self, Error> {
    if !json.is_object() {
      return Err(Error::InvalidJson("record".to_string(), json.dump()));
    }

    let path = json["path"].as_str().map(str::to_owned).ok_or_else(|| Error::InvalidJson("path".to_string(), json.dump()))?;
    let app_path = match &json["app_path"] {
      JsonValue::Null => None,
      value => Some(value.as_str().map(str::to_owned).ok_or_else(|| Error::InvalidJson("app_path".to_string(), json.dump()))?),
    };
    let branch = match json["branch"].as_str() {
      Some(branch) => Branch::from_str(branch)?,
      None => return Err(ValidationError::InvalidBranch(json["branch"].dump()).into()),
    };
    let is_patched = json["is_patched"].as_bool().ok_or_else(|| Error::InvalidJson("is_patched".to_string(), json.dump()))?;
    let is_flatpak = json["is_flatpak"].as_bool().ok_or_else(|| Error::InvalidJson("is_flatpak".to_string(), json.dump()))?;
    // absent and false mean the same
    let custom = match &json["custom"] {
      JsonValue::Null => false,
      value => value.as_bool().ok_or_else(|| Error::InvalidJson("custom".to_string(), json.dump()))?,
    };

    Ok(InstallRecordBuilder::new(path, branch)
      .set_app_path(app_path)
      .set_patched(is_patched)
      .set_flatpak(is_flatpak)
      .set_custom(custom)
      .build()?)
  }

  pub fn parse(text: &str) -> Result<Self, Error> {
    let parsed_json = json::parse(text)?;
    Self::from_json(&parsed_json)
  }

  pub fn list_to_json(records: &[InstallRecord]) -> JsonValue {
    JsonValue::Array(records.iter().map(InstallRecord::to_json).collect())
  }

  pub fn list_from_json(json: &JsonValue) -> Result<Vec<Self>, Error> {
    if !json.is_array() {
      return Err(Error::InvalidJson("records".to_string(), json.dump()));
    }
    json.members().map(InstallRecord::from_json).collect()
  }
}

impl std::fmt::Display for InstallRecord {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "{} ({})", self.path, self.branch)?;
    if self.is_patched {
      write!(f, " [patched]")?;
    }
    if self.is_flatpak {
      write!(f, " [flatpak]")?;
    }
    if self.custom {
      write!(f, " [custom]")?;
    }
    Ok(())
  }
}
