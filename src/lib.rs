//! counterstrip renders a string of decimal digits as a "counter" image by placing one glyph
//! per digit, taken from a theme directory, side by side.
//!
//! # Pipeline overview
//!
//! 1. **Discover**: [`ThemeRegistry`] scans `themes_root/<theme>/` and classifies each theme
//!    by its shared file extension ([`ThemeKind`]).
//! 2. **Resolve**: each digit maps to `<digit>.<ext>` inside the theme directory.
//! 3. **Compose**:
//!    - still themes ([`StaticCompositor`]) become one SVG with inline images and a staggered
//!      CSS "shake" per digit;
//!    - GIF themes ([`AnimatedCompositor`]) are merged frame by frame on a shared timeline
//!      (shorter animations cycle) into one looping GIF, plus an SVG that embeds it.
//! 4. **Dispatch**: [`CounterGenerator`] picks the compositor from the theme's kind.
//!
//! All operations are synchronous and hold no state between calls.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod encode;
mod foundation;
mod generator;
mod render;
mod theme;

pub use assets::decode::{
    DEFAULT_FRAME_DELAY_MS, DigitAnimation, StillAsset, decode_animation, load_animation,
    load_still,
};
pub use assets::resolve::{STATIC_EXTENSIONS, data_uri, find_digit_file, mime_for_path};
pub use encode::gif::encode_looping_gif;
pub use encode::output::{default_output_dir, ensure_dir, output_path, output_stem};
pub use encode::svg::{ImageDef, Placement, stagger_delay, static_document, wrapper_document};
pub use foundation::core::{
    DigitString, MAX_DIGITS, RenderOpts, SpeedMultiplier, default_file_stem,
};
pub use foundation::error::{CounterError, CounterResult};
pub use generator::{CounterGenerator, CounterOutput, CounterRequest};
pub use render::animated::{
    AnimatedComposition, AnimatedCompositor, AnimatedCounter, merge_strip,
};
pub use render::static_svg::{StaticComposition, StaticCompositor};
pub use render::timeline::FrameTimeline;
pub use theme::registry::{Theme, ThemeInfo, ThemeKind, ThemeRegistry};
