pub mod homework;

pub use homework::*;
