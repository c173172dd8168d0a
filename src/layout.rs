pub(crate) mod generator;
mod grid;
mod radial;
pub(crate) mod request;
mod scatter;
mod spiral;
