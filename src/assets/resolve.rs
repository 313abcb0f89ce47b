use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::foundation::error::{CounterError, CounterResult};

/// Extensions tried for still digit images, highest priority first.
pub const STATIC_EXTENSIONS: [&str; 4] = ["png", "gif", "jpg", "jpeg"];

/// Find `<digit>.<ext>` in `dir`, trying each extension in order.
///
/// Each extension is tried lowercase first, then uppercase. No other spellings are probed.
pub fn find_digit_file(
    dir: &Path,
    theme: &str,
    digit: char,
    extensions: &[&str],
) -> CounterResult<PathBuf> {
    for ext in extensions {
        for candidate in [ext.to_ascii_lowercase(), ext.to_ascii_uppercase()] {
            let path = dir.join(format!("{digit}.{candidate}"));
            if path.is_file() {
                return Ok(path);
            }
        }
    }
    Err(CounterError::asset_not_found(theme, digit))
}

/// MIME type inferred from a file's extension; unknown extensions map to `image/png`.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        _ => "image/png",
    }
}

/// Encode `bytes` as a `data:` URI with the given MIME type.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", BASE64.encode(bytes))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/resolve.rs"]
mod tests;
