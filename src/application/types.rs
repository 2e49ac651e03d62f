use crate::domain::{
    DocumentHash, FieldError, InvalidNotarisationId, NotarisationId, NotarisationRecord,
    Signatory, ValidationPolicy,
};
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Operation name registering a document hash
pub const NOTARISE: &str = "NOTARISE";

/// Operation name looking up notarisation details
pub const GETDETAILS: &str = "GETDETAILS";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("{operation} takes {expected} arguments, got {got}")]
    Arity {
        operation: &'static str,
        expected: usize,
        got: usize,
    },

    #[error(transparent)]
    InvalidField(#[from] FieldError),

    #[error(transparent)]
    InvalidNotarisationId(#[from] InvalidNotarisationId),
}

/// A decoded operation, one variant per entry point
///
/// Field lengths are checked when the request is parsed, so a `Request`
/// always carries well-formed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Notarise {
        signatory: Signatory,
        document_hash: DocumentHash,
    },
    GetDetails {
        notarisation_id: NotarisationId,
    },
}

impl Request {
    /// Decode an operation name and its positional byte arguments.
    pub fn parse(
        operation: &str,
        args: &[Vec<u8>],
        policy: &ValidationPolicy,
    ) -> Result<Self, RequestError> {
        match operation {
            NOTARISE => {
                let [signatory, document_hash] = args else {
                    return Err(RequestError::Arity {
                        operation: NOTARISE,
                        expected: 2,
                        got: args.len(),
                    });
                };
                Ok(Request::Notarise {
                    signatory: Signatory::try_from(signatory.as_slice())?,
                    document_hash: DocumentHash::new(document_hash, policy)?,
                })
            }
            GETDETAILS => {
                let [notarisation_id] = args else {
                    return Err(RequestError::Arity {
                        operation: GETDETAILS,
                        expected: 1,
                        got: args.len(),
                    });
                };
                Ok(Request::GetDetails {
                    notarisation_id: NotarisationId::try_from(notarisation_id.as_slice())?,
                })
            }
            other => Err(RequestError::UnknownOperation(other.to_string())),
        }
    }

    pub fn operation(&self) -> &'static str {
        match self {
            Request::Notarise { .. } => NOTARISE,
            Request::GetDetails { .. } => GETDETAILS,
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, Request::GetDetails { .. })
    }
}

/// JSON payload submitted through the rollup
///
/// Binary arguments and the witness signature are base64-encoded.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OperationPayload {
    pub operation: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Ed25519 signature over the document hash, NOTARISE only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub witness: Option<String>,
}

impl OperationPayload {
    pub fn decode_args(&self) -> Result<Vec<Vec<u8>>, base64::DecodeError> {
        self.args
            .iter()
            .map(|arg| base64::engine::general_purpose::STANDARD.decode(arg))
            .collect()
    }

    /// Missing and undecodable witnesses are both treated as empty.
    pub fn decode_witness(&self) -> Vec<u8> {
        self.witness
            .as_deref()
            .and_then(|w| base64::engine::general_purpose::STANDARD.decode(w).ok())
            .unwrap_or_default()
    }
}

/// Result of an operation as sent back through a notice or report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResponse {
    pub operation: String,
    /// Hex of the raw result. Empty on any failure.
    pub result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<NotarisationRecord>,
}

impl OperationResponse {
    pub fn new(operation: &str, result: &[u8]) -> Self {
        Self {
            operation: operation.to_string(),
            result: hex::encode(result),
            details: None,
        }
    }

    /// Attach the decoded record when `result` holds GETDETAILS output.
    pub fn with_details(mut self, result: &[u8]) -> Self {
        self.details = NotarisationRecord::decode(result).ok();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }
}

/// Envelope-level failure, reported before any operation runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
