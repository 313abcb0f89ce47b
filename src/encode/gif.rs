use anyhow::Context;
use image::{
    Delay, Frame, RgbaImage,
    codecs::gif::{GifEncoder, Repeat},
};

use crate::foundation::error::CounterResult;

/// Encode `frames` as an infinitely looping GIF with a uniform per-frame delay.
///
/// Every frame is written full-canvas at (0, 0) with disposal "restore to background";
/// fully transparent pixels map to the frame's transparent palette index.
pub fn encode_looping_gif(frames: Vec<RgbaImage>, delay_ms: u32) -> CounterResult<Vec<u8>> {
    let mut bytes = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut bytes);
        encoder
            .set_repeat(Repeat::Infinite)
            .context("set gif repeat")?;
        let delay = Delay::from_numer_denom_ms(delay_ms, 1);
        encoder
            .encode_frames(
                frames
                    .into_iter()
                    .map(|buf| Frame::from_parts(buf, 0, 0, delay)),
            )
            .context("encode gif frames")?;
    }
    Ok(bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
