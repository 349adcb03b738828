//! Learnable abilities arranged in a tree.
//!
//! An [AbilityBook] keeps a score and a graph of [Ability] nodes rooted at
//! a base ability. An ability can be learned when it is affordable and
//! reachable from the base through learned abilities, and forgotten when
//! no other learned ability depends on it for that connection.

mod ability;
mod book;
mod errors;

pub use ability::Ability;
pub use book::AbilityBook;
pub use errors::{AbilityError, Result};
