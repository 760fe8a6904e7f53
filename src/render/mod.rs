pub(crate) mod arc;
pub(crate) mod background;
pub(crate) mod buffer;
pub(crate) mod spiral;
