pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;

pub use errors::{BotError, BotResult};
