use std::cell::Cell;
use std::fmt::Debug;
use std::hash::Hash;

use reachability::Traversable;

const DEFAULT_TITLE: &str = "?";
const DEFAULT_DESCRIPTION: &str = "??";

/// A single node in an ability tree.
///
/// Everything except the learned flag is fixed at construction. The flag
/// is what the graph sees as traversability.
#[derive(Debug, Clone)]
pub struct Ability<I> {
    id: I,
    title: String,
    description: String,
    price: u64,
    learned: Cell<bool>,
}

impl<I> Ability<I> {
    pub fn new(id: I) -> Self {
        Self {
            id,
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            price: 0,
            learned: Cell::new(false),
        }
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_price(mut self, price: u64) -> Self {
        self.price = price;
        self
    }

    /// Start out already learned.
    pub fn learned(self) -> Self {
        self.learned.set(true);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn is_learned(&self) -> bool {
        self.learned.get()
    }

    pub(crate) fn set_learned(&self, learned: bool) {
        self.learned.set(learned);
    }
}

impl<I> Traversable for Ability<I>
where
    I: Debug + Clone + Eq + Hash,
{
    type Id = I;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn is_traversable(&self) -> bool {
        self.is_learned()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let ability = Ability::new("dash");

        assert_eq!(ability.title(), "?");
        assert_eq!(ability.description(), "??");
        assert_eq!(ability.price(), 0);
        assert!(!ability.is_traversable());
    }

    #[test]
    fn learned_is_traversable() {
        let ability = Ability::new("dash").with_price(3).learned();

        assert!(ability.is_learned());
        assert!(ability.is_traversable());

        ability.set_learned(false);
        assert!(!ability.is_traversable());
    }
}
