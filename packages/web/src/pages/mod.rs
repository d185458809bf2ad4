//! Page components

mod search;

pub use search::*;
