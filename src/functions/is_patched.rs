use std::path::Path;

use crate::filesystem::{exists, is_directory};

/// Whether the `resources` directory of an install has been modified from stock
pub(crate) async fn resources_patched(resources: &Path) -> bool {
  exists(&resources.join("_app.asar")).await
    || exists(&resources.join("app")).await
    || is_directory(&resources.join("app.asar")).await
}
