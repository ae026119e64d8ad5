//! Durable key/value storage ("vault") backends.

pub mod json;
pub mod memory;
pub mod vault;

pub use json::JsonVault;
pub use memory::MemoryVault;
pub use vault::Vault;
