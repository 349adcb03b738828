//! Work lists for graph traversal.
//!
//! Breadth-first and depth-first traversals differ only in which
//! pending vertex they expand next, so both are written against
//! [Frontier].

use std::collections::VecDeque;
use std::default::Default;

/// Trait used to implement the set of vertices waiting to be expanded.
pub trait Frontier {
    type Item;

    fn pop(&mut self) -> Option<Self::Item>;

    fn push(&mut self, item: Self::Item);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out. Expands vertices in order of discovery.
#[derive(Debug)]
pub struct BreadthQueue<T> {
    queue: VecDeque<T>,
}

impl<T> Frontier for BreadthQueue<T> {
    type Item = T;

    fn pop(&mut self) -> Option<Self::Item> {
        self.queue.pop_front()
    }

    fn push(&mut self, item: Self::Item) {
        self.queue.push_back(item);
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

impl<T> Default for BreadthQueue<T> {
    fn default() -> Self {
        BreadthQueue {
            queue: VecDeque::new(),
        }
    }
}

/// Last in, first out. Expands the most recently discovered vertex.
#[derive(Debug)]
pub struct DepthStack<T> {
    stack: Vec<T>,
}

impl<T> Frontier for DepthStack<T> {
    type Item = T;

    fn pop(&mut self) -> Option<Self::Item> {
        self.stack.pop()
    }

    fn push(&mut self, item: Self::Item) {
        self.stack.push(item);
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

impl<T> Default for DepthStack<T> {
    fn default() -> Self {
        DepthStack { stack: Vec::new() }
    }
}
