use std::collections::HashSet;
use std::rc::Rc;

use reachability::{GraphError, ReachabilityGraph, Traversable, Vertex};

type Node = Rc<Vertex<&'static str>>;

fn node(id: &'static str, open: bool) -> Node {
    Rc::new(Vertex::new(id, open))
}

fn graph_of(root: &Node, others: &[&Node]) -> ReachabilityGraph<Vertex<&'static str>> {
    let mut graph = ReachabilityGraph::new(root.clone());
    graph.add_vertices(others.iter().map(|n| (*n).clone()));
    graph
}

fn ids(nodes: &[Node]) -> HashSet<&'static str> {
    nodes.iter().map(|n| *n.id()).collect()
}

fn set(ids: &[&'static str]) -> HashSet<&'static str> {
    ids.iter().cloned().collect()
}

#[test]
fn edges_are_symmetric() {
    let (r, a) = (node("r", true), node("a", false));
    let mut graph = graph_of(&r, &[&a]);

    assert!(graph.add_edges(&*r, vec![&*a]));
    assert_eq!(graph.neighbors(&"r"), Some(&["a"][..]));
    assert_eq!(graph.neighbors(&"a"), Some(&["r"][..]));
}

#[test]
fn repeated_edges_are_not_duplicated() {
    let (r, a, b) = (node("r", true), node("a", false), node("b", false));
    let mut graph = graph_of(&r, &[&a, &b]);

    assert!(graph.add_edges(&*r, vec![&*a, &*b]));
    assert!(graph.add_edges(&*r, vec![&*a]));
    assert!(graph.add_edges(&*a, vec![&*r]));

    assert_eq!(graph.neighbors(&"r"), Some(&["a", "b"][..]));
    assert_eq!(graph.neighbors(&"a"), Some(&["r"][..]));
}

#[test]
fn one_unknown_source_rejects_all_edges() {
    let (r, a, b) = (node("r", true), node("a", false), node("b", false));
    let stranger = node("x", true);
    let mut graph = graph_of(&r, &[&a, &b]);

    assert!(!graph.add_edges(&*r, vec![&*a, &*stranger, &*b]));
    assert_eq!(graph.neighbors(&"r"), Some(&[][..]));
    assert_eq!(graph.neighbors(&"a"), Some(&[][..]));
    assert_eq!(graph.neighbors(&"b"), Some(&[][..]));
    assert!(!graph.contains(&"x"));
}

#[test]
fn unknown_target_is_reported() {
    let (r, a) = (node("r", true), node("a", false));
    let stranger = node("x", true);
    let mut graph = graph_of(&r, &[&a]);

    match graph.try_add_edges(&*stranger, vec![&*a]) {
        Err(GraphError::UnknownVertex(id)) => assert_eq!(id, "\"x\""),
        other => panic!("expected unknown vertex, got {:?}", other),
    }
    assert_eq!(graph.neighbors(&"a"), Some(&[][..]));
}

#[test]
fn adding_a_vertex_twice_keeps_its_edges() {
    let (r, a) = (node("r", true), node("a", false));
    let mut graph = graph_of(&r, &[&a]);
    assert!(graph.add_edges(&*r, vec![&*a]));

    let impostor = node("a", true);
    graph.add_vertices(vec![a.clone(), impostor]);

    assert_eq!(graph.len(), 2);
    assert_eq!(graph.neighbors(&"a"), Some(&["r"][..]));
    assert!(Rc::ptr_eq(graph.vertex(&"a").unwrap(), &a));
}

#[test]
fn path_to_self_always_exists() {
    let (r, a) = (node("r", true), node("a", false));
    let graph = graph_of(&r, &[&a]);

    assert!(graph.has_path(&*a, &*a));
    assert!(graph.has_path(&*r, &*r));
}

#[test]
fn unregistered_endpoints_have_no_path() {
    let r = node("r", true);
    let stranger = node("x", true);
    let graph = graph_of(&r, &[]);

    assert!(!graph.has_path(&*r, &*stranger));
    assert!(!graph.has_path(&*stranger, &*stranger));
}

#[test]
fn only_intermediates_must_be_traversable() {
    let r = node("r", true);
    let a = node("a", true);
    let b = node("b", false);
    let c = node("c", true);
    let mut graph = graph_of(&r, &[&a, &b, &c]);
    assert!(graph.add_edges(&*r, vec![&*a]));
    assert!(graph.add_edges(&*a, vec![&*b]));
    assert!(graph.add_edges(&*b, vec![&*c]));

    assert!(graph.has_path(&*r, &*b));
    assert!(!graph.has_path(&*r, &*c));

    b.set_traversable(true);
    assert!(graph.has_path(&*r, &*c));
}

#[test]
fn leaf_can_be_closed_but_bridge_cannot() {
    let (r, a, b) = (node("r", true), node("a", true), node("b", true));
    let mut graph = graph_of(&r, &[&a, &b]);
    assert!(graph.add_edges(&*r, vec![&*a]));
    assert!(graph.add_edges(&*a, vec![&*b]));

    assert!(!graph.can_make_untraversable(&*a));
    assert!(graph.can_make_untraversable(&*b));
}

#[test]
fn alternate_route_allows_closing() {
    let r = node("r", true);
    let a = node("a", true);
    let b = node("b", true);
    let c = node("c", true);
    let mut graph = graph_of(&r, &[&a, &b, &c]);
    assert!(graph.add_edges(&*r, vec![&*a, &*c]));
    assert!(graph.add_edges(&*b, vec![&*a, &*c]));

    assert!(graph.can_make_untraversable(&*a));
    assert!(graph.can_make_untraversable(&*c));

    c.set_traversable(false);
    assert!(!graph.can_make_untraversable(&*a));
}

#[test]
fn closed_neighbors_impose_no_constraint() {
    let (r, a, b) = (node("r", true), node("a", true), node("b", false));
    let mut graph = graph_of(&r, &[&a, &b]);
    assert!(graph.add_edges(&*a, vec![&*r, &*b]));

    assert!(graph.can_make_untraversable(&*a));
}

#[test]
fn unregistered_node_cannot_be_closed() {
    let r = node("r", true);
    let graph = graph_of(&r, &[]);

    assert!(!graph.can_make_untraversable(&*node("x", true)));
}

#[test]
fn traversal_stops_at_closed_vertices() {
    let r = node("r", true);
    let a = node("a", true);
    let b = node("b", false);
    let d = node("d", true);
    let mut graph = graph_of(&r, &[&a, &b, &d]);
    assert!(graph.add_edges(&*a, vec![&*r, &*b]));
    assert!(graph.add_edges(&*b, vec![&*d]));

    let open = graph.traversable_nodes();
    assert_eq!(open.len(), 1);
    assert_eq!(ids(&open), set(&["a"]));
}

#[test]
fn traversal_reports_each_vertex_once() {
    let r = node("r", true);
    let a = node("a", true);
    let b = node("b", true);
    let c = node("c", true);
    let island = node("i", true);
    let mut graph = graph_of(&r, &[&a, &b, &c, &island]);
    assert!(graph.add_edges(&*r, vec![&*a, &*b]));
    assert!(graph.add_edges(&*c, vec![&*a, &*b]));

    let open = graph.traversable_nodes();
    assert_eq!(open.len(), 3);
    assert_eq!(ids(&open), set(&["a", "b", "c"]));
}

#[test]
fn heterogeneous_nodes_share_a_graph() {
    struct Gate(&'static str);

    impl Traversable for Gate {
        type Id = &'static str;

        fn id(&self) -> &Self::Id {
            &self.0
        }

        fn is_traversable(&self) -> bool {
            false
        }
    }

    let root: Rc<dyn Traversable<Id = &'static str>> = Rc::new(Vertex::new("r", true));
    let gate: Rc<dyn Traversable<Id = &'static str>> = Rc::new(Gate("g"));
    let past: Rc<dyn Traversable<Id = &'static str>> = Rc::new(Vertex::new("p", true));

    let mut graph = ReachabilityGraph::new(root.clone());
    graph.add_vertices(vec![gate.clone(), past.clone()]);
    assert!(graph.add_edges(&*gate, vec![&*root, &*past]));

    assert!(graph.has_path(&*root, &*gate));
    assert!(!graph.has_path(&*root, &*past));
    assert!(graph.traversable_nodes().is_empty());
}

#[test]
fn unlocking_a_small_tree() {
    let r = node("R", true);
    let x = node("X", false);
    let y = node("Y", false);
    let z = node("Z", false);
    let mut graph = graph_of(&r, &[&x, &y, &z]);
    assert!(graph.add_edges(&*r, vec![&*x]));
    assert!(graph.add_edges(&*x, vec![&*y, &*z]));

    assert!(graph.has_path(&*r, &*x));
    assert!(!graph.has_path(&*r, &*y));

    x.set_traversable(true);
    assert!(graph.has_path(&*r, &*y));
    assert!(graph.can_make_untraversable(&*x));

    y.set_traversable(true);
    assert!(!graph.can_make_untraversable(&*x));
    assert!(graph.can_make_untraversable(&*y));
    assert_eq!(ids(&graph.traversable_nodes()), set(&["X", "Y"]));
}
