use crate::structures::ValidationError;

#[derive(Debug)]
pub enum Error {
  IoError(std::io::Error),
  JsonError(json::Error),

  /// Invalid Json, first argument is the offending field, second argument is the dumped json
  InvalidJson(String, String),
  Validation(ValidationError),

  /// The location does not look like a Discord install
  NotAnInstall(String),
  /// No directory to search was given and none could be derived from the environment
  NoSearchRoots(),
}
