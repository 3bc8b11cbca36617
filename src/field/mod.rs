//! The field: deployed structures and units with capped slots.

pub mod registry;

pub use registry::{FieldError, FieldRegistry};
