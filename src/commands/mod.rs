//! Command implementations

mod serve;
mod solve;
mod validate;

pub use serve::serve;
pub use solve::solve;
pub use validate::validate;
