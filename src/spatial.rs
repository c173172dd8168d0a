pub(crate) mod grid_index;
