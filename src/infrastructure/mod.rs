pub mod cartesi;
pub mod database;
pub mod memory;

pub use database::{RecordStore, SqliteRecordStore, StoreError};
pub use memory::MemoryRecordStore;
