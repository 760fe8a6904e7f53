pub(crate) mod floyd_steinberg;
pub(crate) mod palette;
pub(crate) mod quantizer;
