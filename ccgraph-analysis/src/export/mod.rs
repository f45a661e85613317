//! Edge-list export for external graph tools.

pub mod csv_edges;

pub use csv_edges::{json_to_csv, write_edge_list};
