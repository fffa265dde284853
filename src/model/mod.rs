//! Pure domain data structures shared by the actors.

pub mod order;
pub mod product;

pub use order::*;
pub use product::*;
