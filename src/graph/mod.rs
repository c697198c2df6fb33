//! Sentence similarity graph construction and representation
//!
//! Sentences become TF-ISF vectors, pairs above the similarity threshold
//! become weighted undirected edges, and the result is stored in CSR form
//! for the centrality ranker.

pub mod builder;
pub mod csr;
pub mod vector;
