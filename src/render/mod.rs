pub(crate) mod animated;
pub(crate) mod static_svg;
pub(crate) mod timeline;
