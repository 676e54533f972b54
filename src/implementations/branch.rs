use std::str::FromStr;

use crate::structures::{Branch, ValidationError};

impl Branch {
  /// Name as it appears in serialized records
  pub fn as_str(&self) -> &'static str {
    match self {
      Branch::Stable => "Stable",
      Branch::Canary => "Canary",
      Branch::PTB => "PTB",
    }
  }

  /// Guess the branch from an install directory or bundle name, e.g. `DiscordCanary`, `discord-ptb` or `Discord PTB.app`.
  ///
  /// Development builds fall back to `Stable`.
  pub fn from_filename(name: &str) -> Self {
    let lower = name.to_lowercase();
    let lower = lower.strip_suffix(".app").unwrap_or(&lower);

    if lower.ends_with("ptb") {
      Branch::PTB
    } else if lower.ends_with("canary") {
      Branch::Canary
    } else {
      Branch::Stable
    }
  }
}

impl FromStr for Branch {
  type Err = ValidationError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Stable" => Ok(Branch::Stable),
      "Canary" => Ok(Branch::Canary),
      "PTB" => Ok(Branch::PTB),
      other => Err(ValidationError::InvalidBranch(other.to_string())),
    }
  }
}

impl std::fmt::Display for Branch {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
