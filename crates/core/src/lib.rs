#![forbid(unsafe_code)]

pub mod format;
pub mod model;
pub mod time;
pub mod validation;

pub use time::Clock;
