pub(crate) mod gif;
pub(crate) mod output;
pub(crate) mod svg;
