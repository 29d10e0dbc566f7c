mod connection;
mod memory;
mod mongo;
pub mod samples;
mod store;

pub use connection::connect_store;
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::DocumentStore;

pub const PRODUCT_COLLECTION: &str = "product";
pub const ORDER_COLLECTION: &str = "order";
