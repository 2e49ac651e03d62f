use crate::domain::{InvalidNotarisationId, NotarisationId};
use crate::infrastructure::database::{RecordStore, StoreError};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum DetailsError {
    #[error(transparent)]
    InvalidNotarisationId(#[from] InvalidNotarisationId),

    #[error("Notarisation not found")]
    NotFound,

    #[error("Record store error: {0}")]
    Store(#[from] StoreError),
}

/// Looks up the encoded details of a notarisation
pub struct GetDetailsUseCase<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> GetDetailsUseCase<'a> {
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self { store }
    }

    /// Returns the stored bytes unchanged. Decoding is left to the caller.
    pub fn execute(&self, notarisation_id: &[u8]) -> Result<Vec<u8>, DetailsError> {
        let notarisation_id = NotarisationId::try_from(notarisation_id)?;

        match self.store.get(&notarisation_id)? {
            Some(details) => Ok(details),
            None => {
                debug!(id = %notarisation_id, "notarisation not found");
                Err(DetailsError::NotFound)
            }
        }
    }
}
