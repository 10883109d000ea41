//! Objects API model types.

mod attribute;
mod object;

pub use attribute::*;
pub use object::*;
