pub mod kind;

pub use deriv_error::Error;
