pub mod version_ordering;

pub use version_ordering::{compare_versions, highest_version};
