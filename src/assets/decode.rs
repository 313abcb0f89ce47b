use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

use anyhow::Context;
use image::{AnimationDecoder, Delay, ImageDecoder, RgbaImage, codecs::gif::GifDecoder};

use crate::foundation::error::{CounterError, CounterResult};

/// Delay assumed for frames that carry no (or a zero) delay.
pub const DEFAULT_FRAME_DELAY_MS: u32 = 100;

/// A still digit image: encoded bytes plus decoded dimensions.
#[derive(Clone, Debug)]
pub struct StillAsset {
    /// File the asset was read from.
    pub path: PathBuf,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Raw encoded file contents.
    pub bytes: Vec<u8>,
}

/// A decoded digit animation with every frame expanded to full-canvas RGBA8.
#[derive(Clone, Debug)]
pub struct DigitAnimation {
    /// Logical screen width.
    pub width: u32,
    /// Logical screen height.
    pub height: u32,
    /// Frames in playback order. Never empty.
    pub frames: Vec<RgbaImage>,
    /// Delay of frame 0 in milliseconds.
    pub first_delay_ms: u32,
}

impl DigitAnimation {
    /// Number of frames in this animation.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Read a still image and probe its dimensions without decoding pixels.
pub fn load_still(path: &Path) -> CounterResult<StillAsset> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    let (width, height) = image::ImageReader::new(Cursor::new(bytes.as_slice()))
        .with_guessed_format()
        .with_context(|| format!("guess image format of '{}'", path.display()))?
        .into_dimensions()
        .with_context(|| format!("read dimensions of '{}'", path.display()))?;

    Ok(StillAsset {
        path: path.to_path_buf(),
        width,
        height,
        bytes,
    })
}

/// Read and fully decode a GIF animation.
pub fn load_animation(path: &Path) -> CounterResult<DigitAnimation> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read animation '{}'", path.display()))?;
    decode_animation(&bytes).map_err(|e| match e {
        CounterError::Other(err) => {
            CounterError::Other(err.context(format!("decode '{}'", path.display())))
        }
        other => other,
    })
}

/// Decode GIF bytes into RGBA8 frames.
pub fn decode_animation(bytes: &[u8]) -> CounterResult<DigitAnimation> {
    let decoder = GifDecoder::new(Cursor::new(bytes)).context("open gif stream")?;
    let (width, height) = decoder.dimensions();
    let frames = decoder
        .into_frames()
        .collect_frames()
        .context("decode gif frames")?;

    let Some(first) = frames.first() else {
        return Err(anyhow::anyhow!("gif has no frames").into());
    };
    let first_delay_ms = delay_to_ms(first.delay());

    Ok(DigitAnimation {
        width,
        height,
        frames: frames.into_iter().map(image::Frame::into_buffer).collect(),
        first_delay_ms,
    })
}

/// Frame delay in milliseconds. A 0 delay maps to [`DEFAULT_FRAME_DELAY_MS`], matching how
/// browsers clamp zero-delay GIF frames instead of playing them at 0 ms.
fn delay_to_ms(delay: Delay) -> u32 {
    let (numer, denom) = delay.numer_denom_ms();
    let ms = if denom == 0 { 0 } else { numer / denom };
    if ms == 0 { DEFAULT_FRAME_DELAY_MS } else { ms }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
