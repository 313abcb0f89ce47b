use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::foundation::error::{CounterError, CounterResult};

/// Extension (lowercase, without dot) that marks a theme as animated.
const ANIMATED_EXTENSION: &str = "gif";

/// How a theme's digit assets are composed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeKind {
    /// One still raster image per digit, composed into an animated SVG.
    StaticImage,
    /// One animated GIF per digit, merged frame by frame into a GIF.
    AnimatedImage,
}

impl ThemeKind {
    /// Classify a lowercase extension (without the leading dot).
    pub fn from_extension(ext: &str) -> Self {
        if ext == ANIMATED_EXTENSION {
            Self::AnimatedImage
        } else {
            Self::StaticImage
        }
    }
}

/// A discovered theme directory whose files all share one extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Directory name, used as the theme's identifier.
    pub name: String,
    /// Absolute or root-relative directory holding the digit assets.
    pub dir: PathBuf,
    /// Shared lowercase extension, without the leading dot.
    pub extension: String,
    /// Composition strategy derived from `extension`.
    pub kind: ThemeKind,
}

/// Serializable summary of a theme, as printed by `themes --json`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ThemeInfo {
    /// 1-based position in the registry's enumeration order.
    pub index: usize,
    /// Theme name.
    pub name: String,
    /// Shared extension, with the leading dot.
    pub extension: String,
    /// Composition strategy.
    pub kind: ThemeKind,
}

/// Immutable, name-ordered index of the themes found under a root directory.
#[derive(Clone, Debug)]
pub struct ThemeRegistry {
    themes: BTreeMap<String, Theme>,
}

impl ThemeRegistry {
    /// Scan every immediate subdirectory of `root`.
    ///
    /// Subdirectories with no files, or whose files disagree on extension, are skipped.
    pub fn open(root: impl Into<PathBuf>) -> CounterResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(CounterError::configuration(format!(
                "themes root '{}' does not exist or is not a directory",
                root.display()
            )));
        }

        let entries = std::fs::read_dir(&root).map_err(|e| {
            CounterError::configuration(format!(
                "read themes root '{}': {e}",
                root.display()
            ))
        })?;

        let mut themes = BTreeMap::new();
        for entry in entries {
            let entry = entry
                .with_context(|| format!("read entry under '{}'", root.display()))?;
            let dir = entry.path();
            if !dir.is_dir() {
                continue;
            }
            let Some(name) = dir.file_name().and_then(|n| n.to_str()).map(str::to_owned) else {
                tracing::debug!(dir = %dir.display(), "skipping theme dir with non-utf8 name");
                continue;
            };

            match uniform_extension(&dir)? {
                Some(extension) => {
                    let kind = ThemeKind::from_extension(&extension);
                    tracing::debug!(theme = %name, ext = %extension, ?kind, "registered theme");
                    themes.insert(
                        name.clone(),
                        Theme {
                            name,
                            dir,
                            extension,
                            kind,
                        },
                    );
                }
                None => {
                    tracing::debug!(theme = %name, "skipping empty or mixed-extension theme dir");
                }
            }
        }

        Ok(Self { themes })
    }

    /// Ordered mapping of theme name to kind.
    pub fn list_themes(&self) -> BTreeMap<&str, ThemeKind> {
        self.themes
            .iter()
            .map(|(name, theme)| (name.as_str(), theme.kind))
            .collect()
    }

    /// Iterate over themes in enumeration order.
    pub fn themes(&self) -> impl Iterator<Item = &Theme> {
        self.themes.values()
    }

    /// Look up a theme by name.
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Look up a theme by 1-based position in enumeration order.
    pub fn by_index(&self, index: usize) -> Option<&Theme> {
        index.checked_sub(1).and_then(|i| self.themes.values().nth(i))
    }

    /// Number of registered themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// `true` when no subdirectory qualified as a theme.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Summaries with 1-based indices, in enumeration order.
    pub fn describe(&self) -> Vec<ThemeInfo> {
        self.themes
            .values()
            .enumerate()
            .map(|(i, theme)| ThemeInfo {
                index: i + 1,
                name: theme.name.clone(),
                extension: format!(".{}", theme.extension),
                kind: theme.kind,
            })
            .collect()
    }
}

/// Return the single lowercase extension shared by every file in `dir`.
///
/// Hidden files and files without an extension are skipped. `None` when no file remains or
/// when extensions differ.
fn uniform_extension(dir: &Path) -> CounterResult<Option<String>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read theme dir '{}'", dir.display()))?;

    let mut shared: Option<String> = None;
    for entry in entries {
        let path = entry
            .with_context(|| format!("read entry under '{}'", dir.display()))?
            .path();
        if !path.is_file() {
            continue;
        }
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'));
        if hidden {
            continue;
        }
        let Some(ext) = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
        else {
            continue;
        };
        match &shared {
            None => shared = Some(ext),
            Some(prev) if *prev == ext => {}
            Some(_) => return Ok(None),
        }
    }
    Ok(shared)
}

#[cfg(test)]
#[path = "../../tests/unit/theme/registry.rs"]
mod tests;
