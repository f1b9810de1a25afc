pub mod http_client;
pub mod in_memory_store;

pub use http_client::ReqwestHttp;
pub use in_memory_store::{CatalogState, InMemoryStore};
