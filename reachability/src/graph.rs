//! Undirected graph with gated reachability queries.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::errors::{GraphError, Result};
use crate::frontier::{BreadthQueue, DepthStack, Frontier};
use crate::node::Traversable;

type Vertices<N> = HashMap<<N as Traversable>::Id, Rc<N>>;
type Adjacency<N> = HashMap<<N as Traversable>::Id, Vec<<N as Traversable>::Id>>;

/// An undirected graph rooted at a fixed vertex.
///
/// Structure is built once with [ReachabilityGraph::add_vertices] and
/// [ReachabilityGraph::add_edges] and never shrinks. What changes over
/// the graph's lifetime is which vertices are traversable, and that is
/// read from the nodes themselves on every query.
#[derive(Debug)]
pub struct ReachabilityGraph<N>
where
    N: Traversable + ?Sized,
{
    vertices: Vertices<N>,
    adjacency: Adjacency<N>,
    root: Rc<N>,
}

impl<N> ReachabilityGraph<N>
where
    N: Traversable + ?Sized,
{
    /// Create a graph containing only `root`.
    pub fn new(root: Rc<N>) -> Self {
        let mut graph = Self {
            vertices: HashMap::new(),
            adjacency: HashMap::new(),
            root: root.clone(),
        };
        graph.add_vertices(std::iter::once(root));
        graph
    }

    pub fn root(&self) -> &Rc<N> {
        &self.root
    }

    /// Register vertices. Ids which are already present are skipped,
    /// leaving the existing node and its edges untouched.
    pub fn add_vertices<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = Rc<N>>,
    {
        for node in nodes {
            let id = node.id().clone();
            if self.vertices.contains_key(&id) {
                trace!(id = ?id, "vertex already registered");
                continue;
            }

            debug!(id = ?id, "registering vertex");
            self.adjacency.insert(id.clone(), Vec::new());
            self.vertices.insert(id, node);
        }
    }

    /// Connect `target` to each of `sources` with an undirected edge.
    ///
    /// Every endpoint is checked before anything is written, so an unknown
    /// vertex leaves the graph unchanged. Edges which already exist are
    /// not duplicated.
    pub fn try_add_edges<'a, S>(&mut self, target: &N, sources: S) -> Result<()>
    where
        S: IntoIterator<Item = &'a N>,
        N: 'a,
    {
        let target = target.id();
        if !self.contains(target) {
            return Err(GraphError::unknown(target));
        }

        let sources: Vec<N::Id> = sources.into_iter().map(|s| s.id().clone()).collect();
        if let Some(missing) = sources.iter().find(|id| !self.contains(id)) {
            return Err(GraphError::unknown(missing));
        }

        for source in sources.iter() {
            if source == target {
                continue;
            }

            self.connect(source, target);
            self.connect(target, source);
        }

        debug!(target = ?target, sources = ?sources, "added edges");
        Ok(())
    }

    /// Like [ReachabilityGraph::try_add_edges], reporting failure as `false`.
    pub fn add_edges<'a, S>(&mut self, target: &N, sources: S) -> bool
    where
        S: IntoIterator<Item = &'a N>,
        N: 'a,
    {
        match self.try_add_edges(target, sources) {
            Ok(()) => true,
            Err(error) => {
                warn!(%error, "edges rejected");
                false
            }
        }
    }

    fn connect(&mut self, from: &N::Id, to: &N::Id) {
        if let Some(neighbors) = self.adjacency.get_mut(from) {
            if !neighbors.contains(to) {
                neighbors.push(to.clone());
            }
        }
    }

    /// Is there a path from `from` to `to`?
    ///
    /// Every vertex strictly between the two must be traversable. The
    /// endpoints themselves are not checked, which is what lets a caller
    /// ask whether a closed vertex can be reached through open ones.
    /// Unregistered endpoints have no path.
    pub fn has_path(&self, from: &N, to: &N) -> bool {
        if !(self.contains(from.id()) && self.contains(to.id())) {
            return false;
        }

        let found = self.search(from.id(), to.id(), &HashSet::new());
        trace!(from = ?from.id(), to = ?to.id(), found, "path query");
        found
    }

    /// Breadth-first search which never enters a vertex in `excluded`.
    ///
    /// Exclusion is checked before the destination, so an excluded
    /// destination is unreachable.
    fn search(&self, from: &N::Id, to: &N::Id, excluded: &HashSet<N::Id>) -> bool {
        if from == to {
            return true;
        }

        let start = match self.adjacency.get_key_value(from) {
            Some((id, _)) => id,
            None => return false,
        };

        let mut frontier = BreadthQueue::default();
        let mut explored = HashSet::new();
        explored.insert(start);
        frontier.push(start);

        while let Some(v) = frontier.pop() {
            for next in self.adjacent(v) {
                if explored.contains(next) || excluded.contains(next) {
                    continue;
                }
                explored.insert(next);

                if next == to {
                    return true;
                }

                if self.is_open(next) {
                    frontier.push(next);
                }
            }
        }

        false
    }

    /// Can `node` stop being traversable without cutting any of its
    /// traversable neighbors off from the root?
    ///
    /// Closed neighbors are ignored. An unregistered node is never safe.
    pub fn can_make_untraversable(&self, node: &N) -> bool {
        let id = node.id();
        let neighbors = match self.adjacency.get(id) {
            Some(neighbors) => neighbors,
            None => {
                warn!(id = ?id, "removal check on unregistered vertex");
                return false;
            }
        };

        let mut excluded = HashSet::with_capacity(1);
        excluded.insert(id.clone());

        for neighbor in neighbors.iter().filter(|n| self.is_open(n)) {
            if !self.search(neighbor, self.root.id(), &excluded) {
                debug!(id = ?id, neighbor = ?neighbor, "neighbor depends on vertex");
                return false;
            }
        }

        true
    }

    /// Every traversable vertex reachable from the root through
    /// traversable vertices. The root itself is not included.
    ///
    /// Order follows a depth-first walk of the adjacency lists and is
    /// not otherwise meaningful.
    pub fn traversable_nodes(&self) -> Vec<Rc<N>> {
        let root = self.root.id();
        let mut nodes = Vec::new();

        let mut frontier = DepthStack::default();
        let mut explored = HashSet::new();
        explored.insert(root);
        frontier.push(root);

        while let Some(v) = frontier.pop() {
            for next in self.adjacent(v) {
                if !explored.insert(next) {
                    continue;
                }

                if let Some(node) = self.vertices.get(next) {
                    if node.is_traversable() {
                        nodes.push(node.clone());
                        frontier.push(next);
                    }
                }
            }
        }

        nodes
    }

    fn adjacent(&self, id: &N::Id) -> &[N::Id] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn is_open(&self, id: &N::Id) -> bool {
        self.vertices
            .get(id)
            .map(|n| n.is_traversable())
            .unwrap_or(false)
    }

    pub fn contains(&self, id: &N::Id) -> bool {
        self.vertices.contains_key(id)
    }

    pub fn vertex(&self, id: &N::Id) -> Option<&Rc<N>> {
        self.vertices.get(id)
    }

    /// Neighbors of `id` in the order their edges were added.
    pub fn neighbors(&self, id: &N::Id) -> Option<&[N::Id]> {
        self.adjacency.get(id).map(Vec::as_slice)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Rc<N>> {
        self.vertices.values()
    }

    /// Number of vertices, including the root.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false, the root is registered on construction.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
