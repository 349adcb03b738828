use std::cell::Cell;
use std::fmt::Debug;
use std::hash::Hash;

/// The capabilities a graph needs from a node.
///
/// Nodes are shared with the graph through `Rc`, so the traversable flag
/// is usually backed by interior mutability and changed by whoever owns
/// the node.
pub trait Traversable {
    type Id: Debug + Clone + Eq + Hash;

    /// Stable identity of this node. Must not change while the node
    /// is registered in a graph.
    fn id(&self) -> &Self::Id;

    /// Whether a search may pass through this node.
    fn is_traversable(&self) -> bool;
}

/// A node with no payload beyond its identity and flag.
#[derive(Debug, Clone)]
pub struct Vertex<I> {
    id: I,
    traversable: Cell<bool>,
}

impl<I> Vertex<I> {
    pub fn new(id: I, traversable: bool) -> Self {
        Self {
            id,
            traversable: Cell::new(traversable),
        }
    }

    pub fn set_traversable(&self, traversable: bool) {
        self.traversable.set(traversable);
    }
}

impl<I> Traversable for Vertex<I>
where
    I: Debug + Clone + Eq + Hash,
{
    type Id = I;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn is_traversable(&self) -> bool {
        self.traversable.get()
    }
}
