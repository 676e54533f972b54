use std::collections::HashSet;

use crate::structures::InstallRecord;

/// Discovered installs followed by the custom ones that weren't discovered already
pub fn merge_installs(discovered: Vec<InstallRecord>, custom: Vec<InstallRecord>) -> Vec<InstallRecord> {
  let mut seen: HashSet<String> = discovered.iter().map(InstallRecord::id).collect();
  let mut merged = discovered;
  for record in custom {
    if seen.insert(record.id()) {
      merged.push(record);
    }
  }
  merged
}
