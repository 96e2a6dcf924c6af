// Déclare les modules principaux de la crate
pub mod autograd;
pub mod graph;
pub mod ops;
pub mod value;

// Ré-exporte les types principaux pour qu'ils soient accessibles directement
// via `scalargrad_core::{Graph, Value}`
pub use graph::{Graph, NodeId};
pub use value::Value;
// Re-export traits required by public functions/structs
pub use num_traits;

pub mod error;
pub use error::ScalarGradError;
