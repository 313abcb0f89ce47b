use image::{AnimationDecoder, Rgba, codecs::gif::GifDecoder};

use super::*;

#[test]
fn encoded_gif_has_uniform_delay_and_all_frames() {
    let frames = vec![
        RgbaImage::from_pixel(3, 2, Rgba([255, 0, 0, 255])),
        RgbaImage::from_pixel(3, 2, Rgba([0, 0, 255, 255])),
    ];
    let bytes = encode_looping_gif(frames, 50).unwrap();
    assert!(bytes.starts_with(b"GIF89a"));

    let decoded = GifDecoder::new(std::io::Cursor::new(bytes.as_slice()))
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap();
    assert_eq!(decoded.len(), 2);
    for frame in &decoded {
        assert_eq!(frame.delay().numer_denom_ms(), (50, 1));
    }
    assert_eq!(decoded[1].buffer().get_pixel(0, 0), &Rgba([0, 0, 255, 255]));
}

#[test]
fn transparent_pixels_survive_encoding() {
    let mut img = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 0]));
    img.put_pixel(0, 0, Rgba([10, 200, 30, 255]));
    let bytes = encode_looping_gif(vec![img], 100).unwrap();

    let decoded = GifDecoder::new(std::io::Cursor::new(bytes.as_slice()))
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap();
    let buf = decoded[0].buffer();
    assert_eq!(buf.get_pixel(0, 0), &Rgba([10, 200, 30, 255]));
    assert_eq!(buf.get_pixel(1, 0)[3], 0);
}
