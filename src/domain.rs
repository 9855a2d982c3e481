mod sanitized_name;

pub use sanitized_name::*;
