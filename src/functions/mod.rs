mod validate;
mod is_patched;
mod parse_install;
mod find_installs;
mod parse_custom;
mod merge_installs;
mod is_openasar;

pub use validate::validate as validate;
pub use validate::validate_path as validate_path;
pub(crate) use is_patched::resources_patched as resources_patched;
pub use parse_install::parse_install as parse_install;
pub(crate) use find_installs::scan_root as scan_root;
pub use find_installs::find_installs as find_installs;
pub use parse_custom::parse_custom as parse_custom;
pub use merge_installs::merge_installs as merge_installs;
pub use is_openasar::is_openasar as is_openasar;
