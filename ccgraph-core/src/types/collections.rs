//! Hash collection aliases used for internal indices.
//!
//! User-visible results use `BTreeMap`/`BTreeSet` so output order is stable.

pub use rustc_hash::{FxHashMap, FxHashSet};
