pub mod branch;
pub use branch::Branch;

pub mod platform;
pub use platform::Platform;

pub mod install_record;
pub use install_record::{InstallRecord, InstallRecordBuilder};

pub mod scanner;
pub use scanner::{Scanner, ScannerBuilder};

pub mod validation_error;
pub use validation_error::ValidationError;

pub mod error;
pub use error::Error;
