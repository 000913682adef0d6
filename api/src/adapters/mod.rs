mod in_memory_collection;
mod json_file_collection;

pub use in_memory_collection::InMemoryCollection;
pub use json_file_collection::JsonFileCollection;
