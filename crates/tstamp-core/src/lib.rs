pub mod clock;
pub mod diff;
pub mod error;
pub mod format;
