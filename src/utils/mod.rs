// Start of file: /src/utils/mod.rs

/*
    * Re-exports for the utility modules shared by the server stack:
    * global error mapping and JSON formatting helpers.
*/

pub mod error_handler;
pub mod json;

// End of file: /src/utils/mod.rs
