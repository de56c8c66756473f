//! CLI command implementations.

mod inspect;
mod validate;

pub use inspect::inspect;
pub use validate::validate;
