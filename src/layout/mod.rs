pub(crate) mod merge;
pub(crate) mod presets;
pub(crate) mod resolve;
pub(crate) mod schema;
