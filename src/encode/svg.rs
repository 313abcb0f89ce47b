//! SVG text emitters for both counter flavours.
//!
//! Output is built line by line and joined with `\n` so identical inputs always produce
//! byte-identical documents.

/// Keyframes and classes shared by every static counter.
const SHAKE_STYLE: [&str; 8] = [
    "<style>",
    "@keyframes shake {",
    "  0%, 100% { transform: translateY(0); }",
    "  10%, 30%, 50%, 70%, 90% { transform: translateY(-2px); }",
    "  20%, 40%, 60%, 80% { transform: translateY(2px); }",
    "}",
    ".digit { animation: shake 2s infinite; }",
    ".digit:hover { animation: shake 0.5s infinite; }",
];

/// Reusable inline image placed in `<defs>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageDef {
    /// Element id referenced by `<use>`.
    pub id: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `data:` URI holding the encoded image.
    pub href: String,
}

/// One `<use>` placement of an [`ImageDef`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Id of the referenced definition.
    pub id: String,
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Position in the digit string; drives the staggered animation delay.
    pub index: usize,
}

fn svg_open(width: u32, height: u32) -> String {
    format!(
        r#"<svg viewBox="0 0 {width} {height}" width="{width}" height="{height}" version="1.1" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">"#
    )
}

/// Animation delay for position `index`: `index * 0.1` seconds, printed with one decimal.
pub fn stagger_delay(index: usize) -> String {
    format!("{}.{}s", index / 10, index % 10)
}

/// Static counter: shared style, one definition per distinct digit, one `<use>` per position.
pub fn static_document(width: u32, height: u32, defs: &[ImageDef], uses: &[Placement]) -> String {
    let mut lines = Vec::with_capacity(defs.len() + uses.len() + SHAKE_STYLE.len() + 6);
    lines.push(r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string());
    lines.push(svg_open(width, height));
    lines.extend(SHAKE_STYLE.iter().map(|s| s.to_string()));
    lines.push("</style>".to_string());

    lines.push("<defs>".to_string());
    for def in defs {
        lines.push(format!(
            r#"<image id="{}" width="{}" height="{}" xlink:href="{}" />"#,
            def.id, def.width, def.height, def.href
        ));
    }
    lines.push("</defs>".to_string());

    for u in uses {
        lines.push(format!(
            r##"<use class="digit" x="{}" y="{}" xlink:href="#{}" style="animation-delay: {}" />"##,
            u.x,
            u.y,
            u.id,
            stagger_delay(u.index)
        ));
    }
    lines.push("</svg>".to_string());
    lines.join("\n")
}

/// Wrapper around a single inline raster sized to the whole canvas.
pub fn wrapper_document(width: u32, height: u32, href: &str) -> String {
    [
        r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#.to_string(),
        svg_open(width, height),
        format!(r#"<image width="{width}" height="{height}" xlink:href="{href}" />"#),
        "</svg>".to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
#[path = "../../tests/unit/encode/svg.rs"]
mod tests;
