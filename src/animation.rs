pub(crate) mod controls;
pub(crate) mod ease;
pub(crate) mod engine;
pub(crate) mod impls;
pub(crate) mod kind;
pub(crate) mod mouse;
pub(crate) mod props;
pub(crate) mod pulse;
pub(crate) mod smoothing;
