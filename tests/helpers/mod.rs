#![allow(dead_code, unused_imports)]
pub mod fakes;
pub mod logs;

pub use fakes::*;
pub use logs::*;
