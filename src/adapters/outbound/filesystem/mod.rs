/// Filesystem adapters: POM reading, patch files, report files, tree search
mod file_reader;
mod file_writer;
mod patch_file_store;
mod pom_parser;
mod tree_property_search;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use patch_file_store::YamlPatchFileStore;
pub use pom_parser::parse_pom;
pub use tree_property_search::{TreePropertySearch, MAX_PARENT_DEPTH};
