pub mod conv;
pub mod diff;
pub mod now;
pub mod pb;
