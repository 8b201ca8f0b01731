//! Stored-filename generation and byte persistence for uploads.

use crate::error::AppError;
use rand::Rng;
use std::path::Path;

const SUFFIX_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 11;

/// A persisted upload: stored name and the public path it is served under.
#[derive(Debug)]
pub struct StoredFile {
    pub name: String,
    pub relative: String,
}

/// `<epoch millis>-<random suffix><ext>`. The original extension is kept
/// verbatim, `.bin` when the name has none.
pub fn stored_filename(original: &str) -> String {
    let ext = Path::new(original)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_else(|| ".bin".into());
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_CHARS[rng.gen_range(0..SUFFIX_CHARS.len())] as char)
        .collect();
    format!("{}-{}{}", chrono::Utc::now().timestamp_millis(), suffix, ext)
}

pub struct UploadService;

impl UploadService {
    /// Write the bytes under a generated name inside `dir`, creating the
    /// directory if needed. No content-type checks, no deduplication.
    pub async fn save(dir: &Path, original: &str, bytes: &[u8]) -> Result<StoredFile, AppError> {
        tokio::fs::create_dir_all(dir).await?;
        let name = stored_filename(original);
        tokio::fs::write(dir.join(&name), bytes).await?;
        Ok(StoredFile {
            relative: format!("/uploads/{name}"),
            name,
        })
    }
}
