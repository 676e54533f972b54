use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt, SeekFrom};

use crate::structures::InstallRecord;

// 0x12FA
const OPENASAR_MARKER_OFFSET: u64 = 4858;
const OPENASAR_MARKER_WINDOW: u64 = 1024;

/// Whether the asar currently loaded by this install is OpenAsar
pub async fn is_openasar(record: &InstallRecord) -> bool {
  // patchers move the original asar aside to _app.asar
  let asar = record.resources_dir().join(if record.is_patched() { "_app.asar" } else { "app.asar" });

  let Ok(mut file) = File::open(&asar).await else {
    return false;
  };
  if file.seek(SeekFrom::Start(OPENASAR_MARKER_OFFSET)).await.is_err() {
    return false;
  }

  let mut buffer = Vec::with_capacity(OPENASAR_MARKER_WINDOW as usize);
  if file.take(OPENASAR_MARKER_WINDOW).read_to_end(&mut buffer).await.is_err() {
    return false;
  }
  buffer.windows(8).any(|window| window == b"OpenAsar")
}
