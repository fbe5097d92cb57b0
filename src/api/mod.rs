// Start of file: /src/api/mod.rs

pub mod demo;
pub mod fallback;

// End of file: /src/api/mod.rs
