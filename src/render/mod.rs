pub(crate) mod composite;
pub(crate) mod compositor;
pub(crate) mod elements;
pub(crate) mod paint;
pub(crate) mod renderer;
pub(crate) mod surface;
