//! Training-data export: flattened board snapshots written to numbered
//! `ExportedState<N>.txt` / `ExportedMove<N>.txt` files, and a loader that
//! rebuilds a board from them.

mod exporter;
mod snapshot;

pub use exporter::Exporter;
pub use snapshot::{format_values, load_state, one_hot};
