pub mod user_service;
pub mod user_store;
#[cfg(test)]
pub mod memory_store;

pub use user_store::*;
#[cfg(test)]
pub use memory_store::*;
