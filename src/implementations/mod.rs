mod branch;
mod error;
mod install_record;
mod platform;
mod scanner;
mod validation_error;
