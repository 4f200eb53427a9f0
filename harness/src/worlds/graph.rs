//! `GraphWorld`: an explicit directed graph with per-vertex heuristics.
//!
//! Vertices carry a fixed heuristic value; edges carry a step cost. Goals
//! are a set of vertex names. Children are generated in edge insertion
//! order, which makes expansion order fully predictable in tests.
//!
//! Graphs can be built in code or loaded from JSON:
//!
//! ```json
//! {
//!   "start": "A",
//!   "vertices": {"A": 5, "B": 2, "C": 8},
//!   "edges": [["A", "B", 1], ["A", "C", 1]],
//!   "goals": ["B"]
//! }
//! ```

use std::collections::{BTreeMap, BTreeSet};

use statespace_search::{Node, Problem, SearchState, StateId};

use crate::contract::SearchWorld;

/// One vertex of the graph as seen by the engines.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub name: String,
    pub h: f64,
}

impl SearchState for Vertex {
    fn identity(&self) -> StateId {
        StateId::new(self.name.clone())
    }

    fn compute_heuristic_grade(&self) -> f64 {
        self.h
    }
}

/// Typed failure for graph construction and expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge, goal, or the start refers to a vertex that was never declared.
    UnknownVertex { name: String },
    /// The JSON definition is malformed.
    Malformed { detail: String },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVertex { name } => write!(f, "unknown vertex: {name}"),
            Self::Malformed { detail } => write!(f, "malformed graph definition: {detail}"),
        }
    }
}

impl std::error::Error for GraphError {}

#[derive(Debug, Clone, Default)]
struct VertexEntry {
    h: f64,
    edges: Vec<(String, f64)>,
}

/// Explicit graph world.
#[derive(Debug, Clone, Default)]
pub struct GraphWorld {
    start: String,
    vertices: BTreeMap<String, VertexEntry>,
    goals: BTreeSet<String>,
}

impl GraphWorld {
    /// Empty graph that will start from `start` (which must be declared
    /// with [`GraphWorld::vertex`] before running).
    #[must_use]
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            ..Self::default()
        }
    }

    /// Declare a vertex with heuristic `h`. Re-declaring updates `h` and
    /// keeps existing edges.
    #[must_use]
    pub fn vertex(mut self, name: impl Into<String>, h: f64) -> Self {
        self.vertices.entry(name.into()).or_default().h = h;
        self
    }

    /// Add a directed edge. Both endpoints must already be declared.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownVertex`] for an undeclared endpoint.
    pub fn edge(mut self, from: &str, to: &str, cost: f64) -> Result<Self, GraphError> {
        if !self.vertices.contains_key(to) {
            return Err(GraphError::UnknownVertex { name: to.into() });
        }
        let entry = self
            .vertices
            .get_mut(from)
            .ok_or_else(|| GraphError::UnknownVertex { name: from.into() })?;
        entry.edges.push((to.to_string(), cost));
        Ok(self)
    }

    /// Mark a declared vertex as a goal.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownVertex`] for an undeclared vertex.
    pub fn goal(mut self, name: &str) -> Result<Self, GraphError> {
        if !self.vertices.contains_key(name) {
            return Err(GraphError::UnknownVertex { name: name.into() });
        }
        self.goals.insert(name.to_string());
        Ok(self)
    }

    /// Load a graph from its JSON definition (see module docs).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Malformed`] for invalid JSON or missing fields,
    /// and [`GraphError::UnknownVertex`] for dangling references.
    pub fn from_json_str(text: &str) -> Result<Self, GraphError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| GraphError::Malformed {
                detail: e.to_string(),
            })?;

        let start = value["start"].as_str().ok_or_else(|| malformed("missing \"start\""))?;
        let vertices = value["vertices"]
            .as_object()
            .ok_or_else(|| malformed("missing \"vertices\" object"))?;

        let mut world = Self::new(start);
        for (name, h) in vertices {
            let h = h
                .as_f64()
                .ok_or_else(|| malformed(&format!("heuristic of {name} is not a number")))?;
            world = world.vertex(name.clone(), h);
        }
        if !world.vertices.contains_key(start) {
            return Err(GraphError::UnknownVertex { name: start.into() });
        }

        if let Some(edges) = value.get("edges") {
            let edges = edges.as_array().ok_or_else(|| malformed("\"edges\" is not an array"))?;
            for edge in edges {
                let (from, to, cost) = match edge.as_array().map(Vec::as_slice) {
                    Some([from, to, cost]) => (from.as_str(), to.as_str(), cost.as_f64()),
                    _ => return Err(malformed(&format!("bad edge {edge}"))),
                };
                match (from, to, cost) {
                    (Some(from), Some(to), Some(cost)) => world = world.edge(from, to, cost)?,
                    _ => return Err(malformed(&format!("bad edge {edge}"))),
                }
            }
        }

        if let Some(goals) = value.get("goals") {
            let goals = goals.as_array().ok_or_else(|| malformed("\"goals\" is not an array"))?;
            for goal in goals {
                let name = goal
                    .as_str()
                    .ok_or_else(|| malformed(&format!("bad goal {goal}")))?;
                world = world.goal(name)?;
            }
        }

        Ok(world)
    }

    fn make_vertex(&self, name: &str) -> Result<Vertex, GraphError> {
        let entry = self
            .vertices
            .get(name)
            .ok_or_else(|| GraphError::UnknownVertex { name: name.into() })?;
        Ok(Vertex {
            name: name.to_string(),
            h: entry.h,
        })
    }
}

fn malformed(detail: &str) -> GraphError {
    GraphError::Malformed {
        detail: detail.to_string(),
    }
}

impl Problem for GraphWorld {
    type State = Vertex;
    type Error = GraphError;

    fn build_children(&self, parent: &Node<Vertex>) -> Result<Vec<Node<Vertex>>, GraphError> {
        let entry = self
            .vertices
            .get(&parent.state.name)
            .ok_or_else(|| GraphError::UnknownVertex {
                name: parent.state.name.clone(),
            })?;
        entry
            .edges
            .iter()
            .map(|(to, cost)| {
                let vertex = self.make_vertex(to)?;
                Ok(Node::child(parent, vertex, *cost, to.clone()))
            })
            .collect()
    }

    fn is_solution(&self, node: &Node<Vertex>) -> Result<bool, GraphError> {
        Ok(self.goals.contains(&node.state.name))
    }
}

impl SearchWorld for GraphWorld {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "graph"
    }

    fn initial(&self) -> Node<Vertex> {
        let h = self.vertices.get(&self.start).map_or(0.0, |e| e.h);
        Node::root(Vertex {
            name: self.start.clone(),
            h,
        })
    }
}
