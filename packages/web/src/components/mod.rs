//! Reusable UI components

mod domain_fields;
mod loading;
mod result_card;

pub use domain_fields::*;
pub use loading::*;
pub use result_card::*;
