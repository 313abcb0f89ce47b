use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::{core::DigitString, error::CounterResult};

/// Directory name used when the caller gives no output directory.
const DEFAULT_OUTPUT_DIR_NAME: &str = "output";

/// Output stem: the explicit `filename`, or `counter_<digits>`.
pub fn output_stem(digits: &DigitString, filename: Option<&str>) -> String {
    match filename {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("counter_{digits}"),
    }
}

/// `<dir>/<stem>.<ext>`; any dots already in `stem` are kept.
pub fn output_path(dir: &Path, stem: &str, ext: &str) -> PathBuf {
    dir.join(format!("{stem}.{ext}"))
}

/// Create `dir` and its parents if absent.
pub fn ensure_dir(dir: &Path) -> CounterResult<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory '{}'", dir.display()))?;
    Ok(())
}

/// Write `bytes` to `path` in one call, replacing any previous file.
pub fn write_file(path: &Path, bytes: &[u8]) -> CounterResult<()> {
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote output");
    Ok(())
}

/// `output/` beside the running executable, created if missing.
pub fn default_output_dir() -> CounterResult<PathBuf> {
    let exe = std::env::current_exe().context("locate current executable")?;
    let base = exe.parent().unwrap_or_else(|| Path::new("."));
    let dir = base.join(DEFAULT_OUTPUT_DIR_NAME);
    ensure_dir(&dir)?;
    Ok(dir)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/output.rs"]
mod tests;
