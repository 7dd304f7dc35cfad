pub mod callback;
pub mod commands;
pub mod lang;
pub mod state;
pub mod types;
pub mod venue;
