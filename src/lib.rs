#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]

pub mod app;
pub mod batch;
pub mod domain;
pub mod sender;
pub mod source;
pub mod uploader;

// Re-export main types for easy access
pub use app::{App, Config};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
