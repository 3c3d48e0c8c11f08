//! Unity Asset Core
//!
//! Shared building blocks for Unity asset inspection: the tagged value type
//! that type-tree reads produce, and the class-ID name table.

pub mod constants;
pub mod unity_value;

pub use constants::{UNKNOWN_TYPE, class_ids, class_name, class_name_or_unknown, class_names};
pub use unity_value::UnityValue;
