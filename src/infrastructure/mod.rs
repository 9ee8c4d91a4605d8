pub mod config;
pub mod console;
pub mod http_client;
pub mod output;
