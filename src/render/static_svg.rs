use std::path::{Path, PathBuf};

use crate::{
    assets::{
        decode::{StillAsset, load_still},
        resolve::{STATIC_EXTENSIONS, data_uri, find_digit_file, mime_for_path},
    },
    encode::{
        output::{ensure_dir, output_path, output_stem, write_file},
        svg::{ImageDef, Placement, static_document},
    },
    foundation::{
        core::DigitString,
        error::{CounterError, CounterResult},
    },
};

/// A composed static counter, before it is written anywhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticComposition {
    /// Sum of every position's image width.
    pub width: u32,
    /// Tallest digit image.
    pub height: u32,
    /// Complete SVG document text.
    pub svg: String,
}

/// Builds animated SVG counters from themes with one still image per digit.
#[derive(Clone, Debug)]
pub struct StaticCompositor {
    root: PathBuf,
}

impl StaticCompositor {
    /// Compositor reading themes from `root/<theme>/`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Compose `digits` with `theme` and write `<output_dir>/<stem>.svg`.
    ///
    /// `stem` is `filename` when given, `counter_<digits>` otherwise. `output_dir` is created
    /// if missing.
    #[tracing::instrument(skip(self, output_dir), fields(out = %output_dir.as_ref().display()))]
    pub fn render(
        &self,
        digits: &str,
        theme: &str,
        output_dir: impl AsRef<Path>,
        filename: Option<&str>,
    ) -> CounterResult<PathBuf> {
        let digits = DigitString::new(digits)?;
        let composed = self.compose_digits(&digits, theme)?;

        let output_dir = output_dir.as_ref();
        ensure_dir(output_dir)?;
        let path = output_path(output_dir, &output_stem(&digits, filename), "svg");
        write_file(&path, composed.svg.as_bytes())?;
        Ok(path)
    }

    /// Compose `digits` with `theme` in memory.
    pub fn compose(&self, digits: &str, theme: &str) -> CounterResult<StaticComposition> {
        self.compose_digits(&DigitString::new(digits)?, theme)
    }

    fn compose_digits(
        &self,
        digits: &DigitString,
        theme: &str,
    ) -> CounterResult<StaticComposition> {
        let dir = self.root.join(theme);
        if !dir.is_dir() {
            return Err(CounterError::unknown_theme(theme));
        }

        // Distinct digits in first-appearance order; `slots` maps positions into it.
        let mut assets: Vec<(char, StillAsset)> = Vec::new();
        let mut slots = Vec::with_capacity(digits.len());
        for digit in digits.chars() {
            let slot = match assets.iter().position(|(d, _)| *d == digit) {
                Some(slot) => slot,
                None => {
                    let path = find_digit_file(&dir, theme, digit, &STATIC_EXTENSIONS)?;
                    let asset = load_still(&path)?;
                    tracing::debug!(
                        %digit,
                        path = %path.display(),
                        w = asset.width,
                        h = asset.height,
                        "resolved digit image"
                    );
                    assets.push((digit, asset));
                    assets.len() - 1
                }
            };
            slots.push(slot);
        }

        let mut width = 0u32;
        let mut height = 0u32;
        for &slot in &slots {
            let asset = &assets[slot].1;
            width = width.checked_add(asset.width).ok_or_else(|| {
                CounterError::invalid_parameter("counter width overflows u32")
            })?;
            height = height.max(asset.height);
        }

        let defs: Vec<ImageDef> = assets
            .iter()
            .map(|(digit, asset)| ImageDef {
                id: def_id(*digit),
                width: asset.width,
                height: asset.height,
                href: data_uri(mime_for_path(&asset.path), &asset.bytes),
            })
            .collect();

        let mut uses = Vec::with_capacity(slots.len());
        let mut x = 0u32;
        for (index, &slot) in slots.iter().enumerate() {
            let (digit, asset) = &assets[slot];
            uses.push(Placement {
                id: def_id(*digit),
                x,
                y: (height - asset.height) / 2,
                index,
            });
            x += asset.width;
        }

        Ok(StaticComposition {
            width,
            height,
            svg: static_document(width, height, &defs, &uses),
        })
    }
}

fn def_id(digit: char) -> String {
    format!("d{digit}")
}

#[cfg(test)]
#[path = "../../tests/unit/render/static_svg.rs"]
mod tests;
