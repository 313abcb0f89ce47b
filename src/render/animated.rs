use std::path::{Path, PathBuf};

use image::{RgbaImage, imageops};

use crate::{
    assets::{
        decode::{DigitAnimation, load_animation},
        resolve::{data_uri, find_digit_file},
    },
    encode::{
        gif::encode_looping_gif,
        output::{ensure_dir, output_path, output_stem, write_file},
        svg::wrapper_document,
    },
    foundation::{
        core::{DigitString, SpeedMultiplier},
        error::{CounterError, CounterResult},
    },
    render::timeline::FrameTimeline,
};

/// Extension of per-digit animation files.
const ANIMATION_EXTENSION: &str = "gif";

/// Merged frames of an animated counter, before encoding.
#[derive(Clone, Debug)]
pub struct AnimatedComposition {
    /// Sum of native digit widths.
    pub width: u32,
    /// Tallest native digit height.
    pub height: u32,
    /// One full-canvas RGBA frame per timeline step.
    pub frames: Vec<RgbaImage>,
    /// Uniform delay applied to every output frame.
    pub frame_delay_ms: u32,
}

/// Files written for an animated counter plus the facts needed to describe them.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct AnimatedCounter {
    /// Merged GIF.
    pub raster: PathBuf,
    /// SVG wrapper embedding the GIF.
    pub vector: PathBuf,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Number of frames in the merged GIF.
    pub frame_count: usize,
    /// Delay of every merged frame.
    pub frame_delay_ms: u32,
}

/// Merges per-digit GIF animations into one looping GIF and an SVG wrapper.
#[derive(Clone, Debug)]
pub struct AnimatedCompositor {
    root: PathBuf,
}

impl AnimatedCompositor {
    /// Compositor reading themes from `root/<theme>/`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Compose `digits` with `theme`, then write `<stem>.gif` and `<stem>.svg` in `output_dir`.
    #[tracing::instrument(skip(self, output_dir), fields(out = %output_dir.as_ref().display()))]
    pub fn render(
        &self,
        digits: &str,
        theme: &str,
        output_dir: impl AsRef<Path>,
        filename: Option<&str>,
        speed: SpeedMultiplier,
    ) -> CounterResult<AnimatedCounter> {
        let digits = DigitString::new(digits)?;
        let composed = self.compose_digits(&digits, theme, speed)?;
        let AnimatedComposition {
            width,
            height,
            frames,
            frame_delay_ms,
        } = composed;
        let frame_count = frames.len();

        let gif = encode_looping_gif(frames, frame_delay_ms)?;
        let svg = wrapper_document(width, height, &data_uri("image/gif", &gif));

        let output_dir = output_dir.as_ref();
        ensure_dir(output_dir)?;
        let stem = output_stem(&digits, filename);
        let raster = output_path(output_dir, &stem, "gif");
        let vector = output_path(output_dir, &stem, "svg");
        write_file(&raster, &gif)?;
        write_file(&vector, svg.as_bytes())?;

        Ok(AnimatedCounter {
            raster,
            vector,
            width,
            height,
            frame_count,
            frame_delay_ms,
        })
    }

    /// Compose `digits` with `theme` in memory.
    pub fn compose(
        &self,
        digits: &str,
        theme: &str,
        speed: SpeedMultiplier,
    ) -> CounterResult<AnimatedComposition> {
        self.compose_digits(&DigitString::new(digits)?, theme, speed)
    }

    fn compose_digits(
        &self,
        digits: &DigitString,
        theme: &str,
        speed: SpeedMultiplier,
    ) -> CounterResult<AnimatedComposition> {
        let dir = self.root.join(theme);
        if !dir.is_dir() {
            return Err(CounterError::unknown_theme(theme));
        }

        let mut decoded: Vec<(char, DigitAnimation)> = Vec::new();
        let mut slots = Vec::with_capacity(digits.len());
        for digit in digits.chars() {
            let slot = match decoded.iter().position(|(d, _)| *d == digit) {
                Some(slot) => slot,
                None => {
                    let path = find_digit_file(&dir, theme, digit, &[ANIMATION_EXTENSION])?;
                    let anim = load_animation(&path)?;
                    tracing::debug!(
                        %digit,
                        path = %path.display(),
                        frames = anim.frame_count(),
                        delay_ms = anim.first_delay_ms,
                        "resolved digit animation"
                    );
                    decoded.push((digit, anim));
                    decoded.len() - 1
                }
            };
            slots.push(slot);
        }

        let strip: Vec<&DigitAnimation> = slots.iter().map(|&slot| &decoded[slot].1).collect();
        merge_strip(&strip, speed)
    }
}

/// Merge a left-to-right strip of animations onto one transparent canvas per timeline frame.
pub fn merge_strip(
    strip: &[&DigitAnimation],
    speed: SpeedMultiplier,
) -> CounterResult<AnimatedComposition> {
    let timeline = FrameTimeline::new(strip.iter().map(|a| a.frame_count()).collect())?;

    let mut width = 0u32;
    let mut height = 0u32;
    for anim in strip {
        width = width
            .checked_add(anim.width)
            .ok_or_else(|| CounterError::invalid_parameter("counter width overflows u32"))?;
        height = height.max(anim.height);
    }

    let frames = (0..timeline.len())
        .map(|frame| {
            let mut canvas = RgbaImage::new(width, height);
            let mut x = 0i64;
            // Digit cells never overlap, so copying keeps each source pixel's alpha as-is.
            for (anim, source) in strip.iter().zip(timeline.sources(frame)) {
                imageops::replace(&mut canvas, &anim.frames[source], x, 0);
                x += i64::from(anim.width);
            }
            canvas
        })
        .collect();

    // Only frame 0's delay of each digit counts; the fastest digit sets the pace.
    let frame_delay_ms = strip
        .iter()
        .map(|anim| speed.adjust_ms(anim.first_delay_ms))
        .min()
        .unwrap_or_default();

    tracing::debug!(
        width,
        height,
        frames = timeline.len(),
        frame_delay_ms,
        "merged digit strip"
    );

    Ok(AnimatedComposition {
        width,
        height,
        frames,
        frame_delay_ms,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/animated.rs"]
mod tests;
