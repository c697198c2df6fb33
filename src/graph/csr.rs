//! Compressed Sparse Row (CSR) similarity graph
//!
//! CSR keeps each sentence's neighbors contiguous, which is what the
//! centrality power iteration walks on every pass.

use super::builder::GraphBuilder;

/// The sentence similarity graph in CSR form
///
/// Node `i` is the sentence with original index `i`.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Neighbor node for each edge, ascending within a row
    pub col_idx: Vec<u32>,
    /// Edge weights (cosine similarity)
    pub weights: Vec<f64>,
    /// Sum of edge weights per node
    pub total_weight: Vec<f64>,
}

/// The similarity graph consumed by the centrality ranker
pub type SimilarityGraph = CsrGraph;

impl CsrGraph {
    /// Convert a GraphBuilder into CSR format
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let num_nodes = builder.node_count();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::with_capacity(builder.edge_count() * 2);
        let mut weights = Vec::with_capacity(builder.edge_count() * 2);
        let mut total_weight = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for node in 0..num_nodes as u32 {
            // Sorted so iteration (and float summation) order is stable
            let mut edges: Vec<(u32, f64)> = builder
                .edges(node)
                .map(|e| e.iter().map(|(&k, &v)| (k, v)).collect())
                .unwrap_or_default();
            edges.sort_by_key(|(k, _)| *k);

            total_weight.push(edges.iter().map(|(_, w)| w).sum());
            for (target, weight) in edges {
                col_idx.push(target);
                weights.push(weight);
            }
            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            total_weight,
        }
    }

    /// Iterate over (neighbor, weight) pairs of a node
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let start = self.row_ptr[node];
        let end = self.row_ptr[node + 1];
        (start..end).map(move |i| (self.col_idx[i] as usize, self.weights[i]))
    }

    /// Number of edges at a node
    pub fn degree(&self, node: usize) -> usize {
        self.row_ptr[node + 1] - self.row_ptr[node]
    }

    /// Sum of edge weights at a node
    pub fn node_total_weight(&self, node: usize) -> f64 {
        self.total_weight[node]
    }

    /// Weight of the edge between two nodes, 0 if absent
    pub fn weight(&self, a: usize, b: usize) -> f64 {
        if a >= self.num_nodes || b >= self.num_nodes {
            return 0.0;
        }
        let row = &self.col_idx[self.row_ptr[a]..self.row_ptr[a + 1]];
        match row.binary_search(&(b as u32)) {
            Ok(pos) => self.weights[self.row_ptr[a] + pos],
            Err(_) => 0.0,
        }
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Number of undirected edges
    pub fn num_edges(&self) -> usize {
        self.col_idx.len() / 2
    }

    /// Nodes with no edges (their score mass is spread uniformly)
    pub fn dangling_nodes(&self) -> Vec<usize> {
        (0..self.num_nodes)
            .filter(|&n| self.total_weight[n] <= 0.0)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_test_graph() -> CsrGraph {
        let mut builder = GraphBuilder::with_nodes(4);
        builder.set_edge(0, 1, 0.5);
        builder.set_edge(1, 2, 0.2);
        builder.set_edge(0, 2, 0.3);
        CsrGraph::from_builder(&builder)
    }

    #[test]
    fn test_csr_conversion() {
        let csr = build_test_graph();
        assert_eq!(csr.num_nodes, 4);
        assert_eq!(csr.num_edges(), 3);
        assert_eq!(csr.row_ptr, vec![0, 2, 4, 6, 6]);
    }

    #[test]
    fn test_neighbor_iteration_sorted() {
        let csr = build_test_graph();
        let neighbors: Vec<_> = csr.neighbors(0).collect();
        assert_eq!(neighbors, vec![(1, 0.5), (2, 0.3)]);
    }

    #[test]
    fn test_degree_and_weight() {
        let csr = build_test_graph();
        assert_eq!(csr.degree(0), 2);
        assert!((csr.node_total_weight(0) - 0.8).abs() < 1e-12);
        assert_eq!(csr.weight(2, 1), 0.2);
        assert_eq!(csr.weight(1, 2), 0.2);
        assert_eq!(csr.weight(0, 3), 0.0);
        assert_eq!(csr.weight(0, 0), 0.0);
        assert_eq!(csr.weight(9, 0), 0.0);
    }

    #[test]
    fn test_dangling_nodes() {
        let csr = build_test_graph();
        assert_eq!(csr.dangling_nodes(), vec![3]);
    }

    #[test]
    fn test_empty_graph() {
        let csr = CsrGraph::from_builder(&GraphBuilder::default());
        assert!(csr.is_empty());
        assert_eq!(csr.num_edges(), 0);
        assert!(csr.dangling_nodes().is_empty());
    }
}
