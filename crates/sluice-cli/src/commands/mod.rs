//! CLI command implementations

pub(crate) mod common;
pub(crate) mod ls;
pub(crate) mod migrate;
pub(crate) mod sync;
pub(crate) mod verify;
