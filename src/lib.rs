pub mod config;
pub mod console;
pub mod error;
pub mod prints;
pub mod quick_resolver;
pub mod world;
