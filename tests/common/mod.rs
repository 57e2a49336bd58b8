#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use adapter_dijkstra::{Edge, GraphAdapter, Keying, NodeKey};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const START: &str = "start";
pub const FINISH: &str = "finish";

/// Graph over string identifiers, edges kept in insertion order
#[derive(Debug, Default)]
pub struct PrimitiveGraph {
    edges: HashMap<&'static str, Vec<(&'static str, u32)>>,
}

impl PrimitiveGraph {
    pub fn from_lists(lists: &[(&'static str, &[(&'static str, u32)])]) -> Self {
        let edges = lists
            .iter()
            .map(|(node, out)| (*node, out.to_vec()))
            .collect();
        PrimitiveGraph { edges }
    }
}

impl GraphAdapter for PrimitiveGraph {
    type Node = &'static str;
    type Weight = u32;

    fn edges(&self, node: &&'static str) -> Box<dyn Iterator<Item = Edge<&'static str, u32>> + '_> {
        match self.edges.get(node) {
            Some(out) => Box::new(out.iter().map(|&(to, weight)| Edge::new(to, weight))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn keying(&self) -> Keying<'_, &'static str> {
        Keying::self_keyed()
    }
}

/// start→A(5), start→B(2), A→C(4), A→D(2), B→A(8), B→D(7), C→D(6),
/// C→finish(3), D→finish(1)
pub fn city_graph() -> PrimitiveGraph {
    PrimitiveGraph::from_lists(&[
        (START, &[("A", 5), ("B", 2)]),
        ("A", &[("C", 4), ("D", 2)]),
        ("B", &[("A", 8), ("D", 7)]),
        ("C", &[("D", 6), (FINISH, 3)]),
        ("D", &[(FINISH, 1)]),
        (FINISH, &[]),
    ])
}

/// start→A(0), start→B(2), A→finish(0), B→finish(2)
pub fn zero_weight_graph() -> PrimitiveGraph {
    PrimitiveGraph::from_lists(&[
        (START, &[("A", 0), ("B", 2)]),
        ("A", &[(FINISH, 0)]),
        ("B", &[(FINISH, 2)]),
        (FINISH, &[]),
    ])
}

/// A node carrying its own outgoing edges
#[derive(Debug)]
pub struct ObjectNode {
    pub name: String,
    edges: RefCell<Vec<(Rc<ObjectNode>, u32)>>,
}

impl ObjectNode {
    pub fn new(name: &str) -> Rc<Self> {
        Rc::new(ObjectNode {
            name: name.to_string(),
            edges: RefCell::new(Vec::new()),
        })
    }

    pub fn add_edge(&self, to: &Rc<ObjectNode>, cost: u32) {
        self.edges.borrow_mut().push((Rc::clone(to), cost));
    }
}

fn object_edges(node: &Rc<ObjectNode>) -> Box<dyn Iterator<Item = Edge<Rc<ObjectNode>, u32>>> {
    let out: Vec<_> = node
        .edges
        .borrow()
        .iter()
        .map(|(to, cost)| Edge::new(Rc::clone(to), *cost))
        .collect();
    Box::new(out.into_iter())
}

/// Adapter over [`ObjectNode`]s keyed by name
#[derive(Debug, Default)]
pub struct ObjectGraph;

impl GraphAdapter for ObjectGraph {
    type Node = Rc<ObjectNode>;
    type Weight = u32;

    fn edges(
        &self,
        node: &Rc<ObjectNode>,
    ) -> Box<dyn Iterator<Item = Edge<Rc<ObjectNode>, u32>> + '_> {
        object_edges(node)
    }

    fn keying(&self) -> Keying<'_, Rc<ObjectNode>> {
        Keying::derived(|node: &Rc<ObjectNode>| NodeKey::from(node.name.as_str()))
    }
}

/// Same as [`ObjectGraph`] but without key derivation
#[derive(Debug, Default)]
pub struct UnkeyedObjectGraph;

impl GraphAdapter for UnkeyedObjectGraph {
    type Node = Rc<ObjectNode>;
    type Weight = u32;

    fn edges(
        &self,
        node: &Rc<ObjectNode>,
    ) -> Box<dyn Iterator<Item = Edge<Rc<ObjectNode>, u32>> + '_> {
        object_edges(node)
    }
}

/// Nodes of the object version of [`city_graph`]
pub struct ObjectCity {
    pub start: Rc<ObjectNode>,
    pub a: Rc<ObjectNode>,
    pub b: Rc<ObjectNode>,
    pub c: Rc<ObjectNode>,
    pub d: Rc<ObjectNode>,
    pub finish: Rc<ObjectNode>,
}

pub fn object_city() -> ObjectCity {
    let city = ObjectCity {
        start: ObjectNode::new(START),
        a: ObjectNode::new("A"),
        b: ObjectNode::new("B"),
        c: ObjectNode::new("C"),
        d: ObjectNode::new("D"),
        finish: ObjectNode::new(FINISH),
    };

    city.start.add_edge(&city.a, 5);
    city.start.add_edge(&city.b, 2);
    city.a.add_edge(&city.c, 4);
    city.a.add_edge(&city.d, 2);
    city.b.add_edge(&city.a, 8);
    city.b.add_edge(&city.d, 7);
    city.c.add_edge(&city.d, 6);
    city.c.add_edge(&city.finish, 3);
    city.d.add_edge(&city.finish, 1);

    city
}

/// Wraps an adapter and counts how often the search calls into it
pub struct Counting<A> {
    inner: A,
    edge_calls: Cell<usize>,
    key_calls: Rc<Cell<usize>>,
    keying_calls: Cell<usize>,
}

impl<A: GraphAdapter> Counting<A> {
    pub fn new(inner: A) -> Self {
        Counting {
            inner,
            edge_calls: Cell::new(0),
            key_calls: Rc::new(Cell::new(0)),
            keying_calls: Cell::new(0),
        }
    }

    pub fn edge_calls(&self) -> usize {
        self.edge_calls.get()
    }

    pub fn key_calls(&self) -> usize {
        self.key_calls.get()
    }

    pub fn keying_calls(&self) -> usize {
        self.keying_calls.get()
    }
}

impl<A: GraphAdapter> GraphAdapter for Counting<A> {
    type Node = A::Node;
    type Weight = A::Weight;

    fn edges(&self, node: &A::Node) -> Box<dyn Iterator<Item = Edge<A::Node, A::Weight>> + '_> {
        self.edge_calls.set(self.edge_calls.get() + 1);
        self.inner.edges(node)
    }

    fn keying(&self) -> Keying<'_, A::Node> {
        self.keying_calls.set(self.keying_calls.get() + 1);
        let inner = self.inner.keying();
        if !inner.is_available() {
            return Keying::Missing;
        }

        let calls = Rc::clone(&self.key_calls);
        Keying::derived(move |node: &A::Node| {
            calls.set(calls.get() + 1);
            inner.key(node).unwrap()
        })
    }
}

/// Graph over vertex indices, used for generated graphs
#[derive(Debug, Clone)]
pub struct IndexGraph {
    pub lists: Vec<Vec<(usize, u32)>>,
}

impl GraphAdapter for IndexGraph {
    type Node = usize;
    type Weight = u32;

    fn edges(&self, node: &usize) -> Box<dyn Iterator<Item = Edge<usize, u32>> + '_> {
        Box::new(self.lists[*node].iter().map(|&(to, weight)| Edge::new(to, weight)))
    }

    fn keying(&self) -> Keying<'_, usize> {
        Keying::self_keyed()
    }
}

/// Random DAG where every edge goes from a lower to a higher index
pub fn random_dag(
    seed: u64,
    vertices: usize,
    edge_probability: f64,
    max_weight: u32,
) -> IndexGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut lists = vec![Vec::new(); vertices];

    for from in 0..vertices {
        for to in (from + 1)..vertices {
            if rng.gen_bool(edge_probability) {
                lists[from].push((to, rng.gen_range(0..=max_weight)));
            }
        }
    }

    IndexGraph { lists }
}

/// Exact distances from vertex 0 of a graph produced by [`random_dag`]
pub fn dag_distances(graph: &IndexGraph) -> Vec<Option<u32>> {
    let mut dist = vec![None; graph.lists.len()];
    if dist.is_empty() {
        return dist;
    }
    dist[0] = Some(0);

    for from in 0..graph.lists.len() {
        let Some(base) = dist[from] else { continue };
        for &(to, weight) in &graph.lists[from] {
            let alt = base + weight;
            if dist[to].map_or(true, |current| alt < current) {
                dist[to] = Some(alt);
            }
        }
    }

    dist
}
