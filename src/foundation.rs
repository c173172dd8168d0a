pub(crate) mod core;
pub(crate) mod error;
pub mod math;
pub(crate) mod params;
