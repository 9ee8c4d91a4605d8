pub mod builders;
pub mod collector;
pub mod services;
