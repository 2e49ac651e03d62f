pub mod application;
pub mod config;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

// Re-export commonly used types
pub use application::{
    AuthorizationOracle, HeightProvider, NotaryContract, NotariseUseCase, GetDetailsUseCase,
};
pub use domain::{NotarisationId, NotarisationRecord, ValidationPolicy};
pub use infrastructure::database::{RecordStore, SqliteRecordStore};
