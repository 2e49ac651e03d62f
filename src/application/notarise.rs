use super::authority::{AuthorizationOracle, HeightProvider};
use crate::domain::{
    encode_record, derive_id, DocumentHash, FieldError, NotarisationId, Signatory,
    ValidationPolicy,
};
use crate::infrastructure::database::{RecordStore, StoreError};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum NotariseError {
    #[error(transparent)]
    InvalidField(#[from] FieldError),

    #[error("Request is not witnessed by the signatory")]
    NotWitnessed,

    #[error("Record store error: {0}")]
    Store(#[from] StoreError),
}

/// Registers a document hash under the signatory that authorised it
pub struct NotariseUseCase<'a> {
    store: &'a dyn RecordStore,
    policy: ValidationPolicy,
}

impl<'a> NotariseUseCase<'a> {
    pub fn new(store: &'a dyn RecordStore, policy: ValidationPolicy) -> Self {
        Self { store, policy }
    }

    /// Validate, authorise, encode and commit a notarisation.
    ///
    /// Nothing is written unless validation and authorisation both pass.
    pub fn execute(
        &self,
        signatory: &[u8],
        document_hash: &[u8],
        height: &dyn HeightProvider,
        oracle: &dyn AuthorizationOracle,
    ) -> Result<NotarisationId, NotariseError> {
        let signatory = Signatory::try_from(signatory)?;
        let document_hash = DocumentHash::new(document_hash, &self.policy)?;

        if !oracle.is_witnessed_by(&signatory) {
            return Err(NotariseError::NotWitnessed);
        }

        let height = height.current_height();
        let details = encode_record(height, signatory.as_bytes(), document_hash.as_bytes());
        let notarisation_id = derive_id(&details);

        self.store.put(&notarisation_id, &details)?;

        info!(
            id = %notarisation_id,
            height,
            signatory = ?signatory,
            "document notarised"
        );
        debug!(len = details.len(), "stored encoded details");

        Ok(notarisation_id)
    }
}
