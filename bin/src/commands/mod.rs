//! CLI command implementations.

pub(crate) mod history;
pub(crate) mod lookup;
