pub mod error;
pub mod sparse;
pub mod graph;
pub mod ordering;
pub mod utility;
pub mod gallery;
pub mod config;

pub use error::{OrderingError,Result};
pub use sparse::{SparseView,CSCSparse,DenseMatrix};
pub use graph::EliminationGraph;
pub use ordering::{PermutationStrategy,OrderingMethod};
pub use config::OrderingConfig;
