pub mod handler;
pub mod routes;
