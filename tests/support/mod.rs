#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{
    Delay, Frame, Rgba, RgbaImage,
    codecs::gif::{GifEncoder, Repeat},
};

pub fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "counterstrip_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

/// Distinct opaque colour for `(digit, frame)`.
pub fn color(digit: u8, frame: usize) -> [u8; 4] {
    [digit * 20, (frame as u8).wrapping_mul(23), 100, 255]
}

pub fn write_png_theme(dir: &Path, digits: &str, w: u32, h: u32) {
    std::fs::create_dir_all(dir).unwrap();
    for d in digits.bytes() {
        RgbaImage::from_pixel(w, h, Rgba(color(d - b'0', 0)))
            .save(dir.join(format!("{}.png", d as char)))
            .unwrap();
    }
}

pub fn write_gif(path: &Path, w: u32, h: u32, digit: u8, frames: usize, delay_ms: u32) {
    let mut buf = Vec::new();
    {
        let mut enc = GifEncoder::new(&mut buf);
        enc.set_repeat(Repeat::Infinite).unwrap();
        for f in 0..frames {
            let img = RgbaImage::from_pixel(w, h, Rgba(color(digit, f)));
            enc.encode_frame(Frame::from_parts(
                img,
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms, 1),
            ))
            .unwrap();
        }
    }
    std::fs::write(path, buf).unwrap();
}

pub fn write_gif_theme(dir: &Path, digits: &str, w: u32, h: u32, frames: usize, delay_ms: u32) {
    std::fs::create_dir_all(dir).unwrap();
    for d in digits.bytes() {
        write_gif(
            &dir.join(format!("{}.gif", d as char)),
            w,
            h,
            d - b'0',
            frames,
            delay_ms,
        );
    }
}
