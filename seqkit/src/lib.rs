//! Generic helpers for working with slices: predicate search, comparison,
//! deduplication, grouping, filtering, mapping and folding.
//!
//! All operations are eager. They borrow their input and return a freshly
//! allocated `Vec` (or map), never a view into the input.

mod aggregate;
mod compare;
pub mod error;
mod group;
pub mod maps;
pub mod pick;
mod search;
mod strings;
mod transform;
mod unique;

pub use aggregate::{all, any};
pub use compare::equal;
pub use error::{Error, Result};
pub use group::group_by;
pub use search::{contains, contains_generic, count, count_generic, find_index, find_index_generic};
pub use strings::make_unique_strings;
pub use transform::{concat_slices, filter, map, map_indexed, reduce};
pub use unique::{unique, unique_configurable, unique_first, unique_hashed, unique_last, Keep};
