use std::io::Cursor;

use image::{
    Frame, Rgba,
    codecs::gif::{GifEncoder, Repeat},
};

use super::*;

fn gif_bytes(w: u32, h: u32, colors: &[[u8; 4]], delay_ms: u32) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut enc = GifEncoder::new(&mut buf);
        enc.set_repeat(Repeat::Infinite).unwrap();
        for c in colors {
            let img = RgbaImage::from_pixel(w, h, Rgba(*c));
            enc.encode_frame(Frame::from_parts(
                img,
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms, 1),
            ))
            .unwrap();
        }
    }
    buf
}

#[test]
fn decode_animation_reads_frames_and_first_delay() {
    let bytes = gif_bytes(
        4,
        3,
        &[[255, 0, 0, 255], [0, 255, 0, 255], [0, 0, 255, 255]],
        80,
    );
    let anim = decode_animation(&bytes).unwrap();
    assert_eq!((anim.width, anim.height), (4, 3));
    assert_eq!(anim.frame_count(), 3);
    assert_eq!(anim.first_delay_ms, 80);
    assert_eq!(anim.frames[1].get_pixel(2, 1), &Rgba([0, 255, 0, 255]));
}

#[test]
fn zero_delay_falls_back_to_default() {
    let bytes = gif_bytes(2, 2, &[[9, 9, 9, 255]], 0);
    let anim = decode_animation(&bytes).unwrap();
    assert_eq!(anim.first_delay_ms, DEFAULT_FRAME_DELAY_MS);
}

#[test]
fn decode_animation_rejects_garbage() {
    assert!(decode_animation(b"not a gif").is_err());
}

#[test]
fn load_still_probes_dimensions() {
    let dir = std::env::temp_dir().join(format!("counterstrip_still_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("4.png");

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(RgbaImage::new(20, 30))
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    std::fs::write(&path, &buf).unwrap();

    let still = load_still(&path).unwrap();
    assert_eq!((still.width, still.height), (20, 30));
    assert_eq!(still.bytes, buf);

    std::fs::remove_dir_all(&dir).ok();
}
