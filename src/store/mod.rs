pub mod http;
pub mod json_file;
pub mod memory;
pub mod traits;

pub use http::HttpStore;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::PropertyStore;
