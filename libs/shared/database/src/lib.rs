pub mod memory;
pub mod repository;
pub mod views;

pub use memory::InMemoryRepository;
pub use repository::{Entity, Repository, StoreError};
pub use views::{View, ViewCache};
