//! Platform glue and small helpers shared by every view.

pub mod format;
pub mod platform;
pub mod timing;
