pub mod providers;
pub mod runtime;
