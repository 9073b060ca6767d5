pub mod config;
pub mod db;
pub mod routes;
pub mod search;
pub mod types;
pub mod utils;
