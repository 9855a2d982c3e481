mod greet;
mod index;

pub use greet::*;
pub use index::*;
