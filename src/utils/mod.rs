pub mod constants;
pub mod distance;
pub mod filter;
pub mod format;
pub mod keyboard;
pub mod translations;
