use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct EdgeData<V> {
    from: V,
    to: V,
}

#[derive(Debug, Deserialize)]
struct GraphFileData<V> {
    vertices: Vec<V>,
    edges: Vec<EdgeData<V>>,
}

/// Undirected graph stored as an adjacency list.
///
/// Edges are always symmetric: `add_edge` and `remove_edge` update both
/// endpoints. Vertex order is insertion order.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    order: Vec<V>,
    adjacency: HashMap<V, Vec<V>>,
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Graph {
            order: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Load a graph from `{ "vertices": [..], "edges": [{ "from", "to" }] }`
    pub fn from_json_file(path: &str) -> Result<Self, GraphError>
    where
        V: DeserializeOwned,
    {
        let content = std::fs::read_to_string(path)?;
        let data: GraphFileData<V> = serde_json::from_str(&content)?;

        let mut graph = Graph::new();
        graph.add_vertices(data.vertices);
        for edge in &data.edges {
            graph.add_edge(&edge.from, &edge.to);
        }
        Ok(graph)
    }

    /// Add a vertex; does nothing if it is already present
    pub fn add_vertex(&mut self, vertex: V) {
        if !self.adjacency.contains_key(&vertex) {
            self.order.push(vertex.clone());
            self.adjacency.insert(vertex, Vec::new());
        }
    }

    pub fn add_vertices<I: IntoIterator<Item = V>>(&mut self, vertices: I) {
        for vertex in vertices {
            self.add_vertex(vertex);
        }
    }

    /// Remove a vertex and every edge touching it
    pub fn remove_vertex(&mut self, vertex: &V) {
        let neighbours = self.adjacency.remove(vertex).unwrap_or_default();
        for neighbour in &neighbours {
            if let Some(list) = self.adjacency.get_mut(neighbour) {
                list.retain(|v| v != vertex);
            }
        }
        self.order.retain(|v| v != vertex);
    }

    pub fn remove_vertices<'a, I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
    {
        for vertex in vertices {
            self.remove_vertex(vertex);
        }
    }

    /// Connect two existing vertices. Unknown vertices make this a no-op.
    pub fn add_edge(&mut self, a: &V, b: &V) {
        if !self.has_vertex(a) || !self.has_vertex(b) {
            return;
        }
        if let Some(list) = self.adjacency.get_mut(a) {
            if !list.contains(b) {
                list.push(b.clone());
            }
        }
        if let Some(list) = self.adjacency.get_mut(b) {
            if !list.contains(a) {
                list.push(a.clone());
            }
        }
    }

    pub fn remove_edge(&mut self, a: &V, b: &V) {
        if let Some(list) = self.adjacency.get_mut(a) {
            list.retain(|v| v != b);
        }
        if let Some(list) = self.adjacency.get_mut(b) {
            list.retain(|v| v != a);
        }
    }

    /// True if `b` is in `a`'s neighbour list
    pub fn are_neighbours(&self, a: &V, b: &V) -> bool {
        self.get_neighbours(a).contains(b)
    }

    /// Neighbours of `vertex`, empty if the vertex is unknown
    pub fn get_neighbours(&self, vertex: &V) -> &[V] {
        self.adjacency
            .get(vertex)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn vertices(&self) -> &[V] {
        &self.order
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.order.iter()
    }
}

impl<V> Default for Graph<V>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> IntoIterator for &'a Graph<V>
where
    V: Eq + Hash + Clone,
{
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> fmt::Display for Graph<V>
where
    V: Eq + Hash + Clone + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.order {
            let neighbours: Vec<String> = self
                .get_neighbours(vertex)
                .iter()
                .map(|n| n.to_string())
                .collect();
            writeln!(f, "{} ---> {}", vertex, neighbours.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph<&'static str> {
        let mut graph = Graph::new();
        graph.add_vertices(["a", "b", "c"]);
        graph.add_edge(&"a", &"b");
        graph.add_edge(&"b", &"c");
        graph.add_edge(&"c", &"a");
        graph
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut graph = Graph::new();
        graph.add_vertex(1);
        graph.add_vertex(1);
        graph.add_vertex(2);
        assert_eq!(graph.vertices(), &[1, 2]);
    }

    #[test]
    fn test_add_edge_is_symmetric_and_deduplicated() {
        let mut graph = Graph::new();
        graph.add_vertices([1, 2]);
        graph.add_edge(&1, &2);
        graph.add_edge(&2, &1);
        assert_eq!(graph.get_neighbours(&1), &[2]);
        assert_eq!(graph.get_neighbours(&2), &[1]);
    }

    #[test]
    fn test_add_edge_requires_both_vertices() {
        let mut graph = Graph::new();
        graph.add_vertex(1);
        graph.add_edge(&1, &2);
        assert!(graph.get_neighbours(&1).is_empty());
        assert!(!graph.has_vertex(&2));
    }

    #[test]
    fn test_remove_vertex_prunes_neighbours() {
        let mut graph = Graph::new();
        graph.add_vertices(["A", "B"]);
        graph.add_edge(&"A", &"B");
        graph.remove_vertex(&"A");

        assert!(!graph.get_neighbours(&"B").contains(&"A"));
        assert!(!graph.vertices().contains(&"A"));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_remove_missing_vertex_is_noop() {
        let mut graph = triangle();
        graph.remove_vertex(&"z");
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn test_remove_vertices() {
        let mut graph = triangle();
        graph.remove_vertices(&["a", "b"]);
        assert_eq!(graph.vertices(), &["c"]);
        assert!(graph.get_neighbours(&"c").is_empty());
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = triangle();
        graph.remove_edge(&"a", &"b");
        assert!(!graph.are_neighbours(&"a", &"b"));
        assert!(!graph.are_neighbours(&"b", &"a"));
        assert!(graph.are_neighbours(&"a", &"c"));

        // Removing again is harmless
        graph.remove_edge(&"a", &"b");
        graph.remove_edge(&"x", &"y");
    }

    #[test]
    fn test_get_neighbours_of_unknown_vertex() {
        let graph = triangle();
        assert!(graph.get_neighbours(&"nowhere").is_empty());
    }

    #[test]
    fn test_iteration_is_restartable() {
        let graph = triangle();
        let first: Vec<_> = graph.iter().collect();
        let second: Vec<_> = (&graph).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![&"a", &"b", &"c"]);
    }

    #[test]
    fn test_display() {
        let mut graph = Graph::new();
        graph.add_vertices(["a", "b"]);
        graph.add_edge(&"a", &"b");
        assert_eq!(graph.to_string(), "a ---> b\nb ---> a\n");
    }

    #[test]
    fn test_from_json_file() {
        let graph: Graph<String> =
            Graph::from_json_file("data/graph.json").expect("Failed to load graph");
        assert_eq!(graph.vertex_count(), 4);
        assert!(graph.are_neighbours(&"a".to_string(), &"b".to_string()));
        assert!(graph.are_neighbours(&"b".to_string(), &"a".to_string()));
        // Edge to an undeclared vertex is dropped
        assert!(!graph.has_vertex(&"z".to_string()));
    }

    #[test]
    fn test_from_missing_file() {
        let result: Result<Graph<String>, _> = Graph::from_json_file("data/missing.json");
        assert!(matches!(result, Err(GraphError::IoError(_))));
    }
}
