//! Configuration model.
//!
//! Category rules (capacity, special flag, subgroup count) and the column
//! bindings that locate fields in the roster and auxiliary tables. A
//! [`Config`] is built programmatically or loaded from JSON, validated once,
//! and then passed explicitly into every operation.
//!
//! Category order is significant: it is the tie-break order of the
//! constrained allocation path, so [`Config`] preserves insertion order.

mod loader;
mod model;
mod types;

pub use model::Config;
pub use types::{Capacity, Category, ColumnBindings};
