use super::authority::{AuthorizationOracle, HeightProvider};
use super::details::{DetailsError, GetDetailsUseCase};
use super::notarise::{NotariseError, NotariseUseCase};
use super::types::{Request, RequestError};
use crate::domain::{NotarisationId, ValidationPolicy};
use crate::infrastructure::database::RecordStore;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum OperationError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Notarise(#[from] NotariseError),

    #[error(transparent)]
    Details(#[from] DetailsError),
}

/// Collapse an operation outcome to its wire form.
///
/// Every failure becomes empty bytes: callers cannot tell a malformed input
/// from a refused witness or a missing record.
pub fn to_wire(outcome: Result<Vec<u8>, OperationError>) -> Vec<u8> {
    match outcome {
        Ok(result) => result,
        Err(e) => {
            debug!(error = %e, "operation failed");
            Vec::new()
        }
    }
}

/// The notary state machine: a record store plus the rules for writing to it
pub struct NotaryContract {
    store: Box<dyn RecordStore>,
    policy: ValidationPolicy,
}

impl NotaryContract {
    pub fn new(store: Box<dyn RecordStore>, policy: ValidationPolicy) -> Self {
        Self { store, policy }
    }

    pub fn store(&self) -> &dyn RecordStore {
        &*self.store
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    pub fn notarise(
        &self,
        signatory: &[u8],
        document_hash: &[u8],
        height: &dyn HeightProvider,
        oracle: &dyn AuthorizationOracle,
    ) -> Result<NotarisationId, NotariseError> {
        NotariseUseCase::new(self.store(), self.policy).execute(
            signatory,
            document_hash,
            height,
            oracle,
        )
    }

    pub fn get_details(&self, notarisation_id: &[u8]) -> Result<Vec<u8>, DetailsError> {
        GetDetailsUseCase::new(self.store()).execute(notarisation_id)
    }

    /// Run an already-parsed request.
    pub fn dispatch(
        &self,
        request: &Request,
        height: &dyn HeightProvider,
        oracle: &dyn AuthorizationOracle,
    ) -> Result<Vec<u8>, OperationError> {
        match request {
            Request::Notarise {
                signatory,
                document_hash,
            } => {
                let id = self.notarise(
                    signatory.as_bytes(),
                    document_hash.as_bytes(),
                    height,
                    oracle,
                )?;
                Ok(id.to_vec())
            }
            Request::GetDetails { notarisation_id } => {
                Ok(self.get_details(notarisation_id.as_bytes())?)
            }
        }
    }

    /// Single host entry point: operation name plus positional arguments.
    ///
    /// Returns the 20-byte id for NOTARISE, the encoded record for GETDETAILS,
    /// and empty bytes for any failure or unrecognised operation.
    pub fn invoke(
        &self,
        operation: &str,
        args: &[Vec<u8>],
        height: &dyn HeightProvider,
        oracle: &dyn AuthorizationOracle,
    ) -> Vec<u8> {
        let outcome = Request::parse(operation, args, &self.policy)
            .map_err(OperationError::from)
            .and_then(|request| self.dispatch(&request, height, oracle));
        to_wire(outcome)
    }
}
