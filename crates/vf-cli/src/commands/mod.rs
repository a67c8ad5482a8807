//! CLI command implementations

pub(crate) mod common;
pub(crate) mod interactive;
pub(crate) mod ls;
pub(crate) mod render;
pub(crate) mod search;
