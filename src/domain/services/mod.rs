pub mod status_tracker;
pub mod validator;

pub use status_tracker::*;
pub use validator::*;
