use super::codec::{self, DecodeError};
use super::id::NotarisationId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Length of a signatory public key in bytes
pub const SIGNATORY_LEN: usize = 32;

/// Default lower bound on the length of a registered document hash
pub const DEFAULT_MIN_DOCUMENT_HASH_LEN: usize = 16;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Signatory must be 32 bytes, got {len}")]
    InvalidSignatory { len: usize },

    #[error("Document hash must be at least {min} bytes, got {len}")]
    DocumentHashTooShort { len: usize, min: usize },
}

/// Input rules applied before a record is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    pub min_document_hash_len: usize,
}

impl ValidationPolicy {
    pub fn new(min_document_hash_len: usize) -> Self {
        Self {
            min_document_hash_len,
        }
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DOCUMENT_HASH_LEN)
    }
}

/// Public key of the party that authorised a notarisation
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signatory([u8; SIGNATORY_LEN]);

impl Signatory {
    pub fn as_bytes(&self) -> &[u8; SIGNATORY_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl TryFrom<&[u8]> for Signatory {
    type Error = FieldError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let key: [u8; SIGNATORY_LEN] = bytes
            .try_into()
            .map_err(|_| FieldError::InvalidSignatory { len: bytes.len() })?;
        Ok(Self(key))
    }
}

impl From<[u8; SIGNATORY_LEN]> for Signatory {
    fn from(bytes: [u8; SIGNATORY_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Signatory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signatory({})", &self.to_hex()[..16])
    }
}

/// Cryptographic hash of the document being notarised
///
/// Opaque to the notary; only its length is checked.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DocumentHash(Vec<u8>);

impl DocumentHash {
    pub fn new(bytes: &[u8], policy: &ValidationPolicy) -> Result<Self, FieldError> {
        if bytes.len() < policy.min_document_hash_len {
            return Err(FieldError::DocumentHashTooShort {
                len: bytes.len(),
                min: policy.min_document_hash_len,
            });
        }
        Ok(Self(bytes.to_vec()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Debug for DocumentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocumentHash({})", self.to_hex())
    }
}

/// Decoded notarisation details
///
/// Only the encoded form is ever persisted. This view exists for consumers
/// that verify a stored record against a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotarisationRecord {
    pub height: u32,
    #[serde(with = "hex_array")]
    pub signatory: [u8; SIGNATORY_LEN],
    #[serde(with = "hex::serde")]
    pub document_hash: Vec<u8>,
}

impl NotarisationRecord {
    pub fn new(height: u32, signatory: &Signatory, document_hash: &DocumentHash) -> Self {
        Self {
            height,
            signatory: *signatory.as_bytes(),
            document_hash: document_hash.as_bytes().to_vec(),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        codec::encode_record(self.height, &self.signatory, &self.document_hash)
    }

    pub fn id(&self) -> NotarisationId {
        codec::derive_id(&self.encode())
    }

    pub fn decode(encoded_record: &[u8]) -> Result<Self, DecodeError> {
        Ok(Self {
            height: codec::decode_height(encoded_record)?,
            signatory: codec::decode_signatory(encoded_record)?,
            document_hash: codec::decode_document_hash(encoded_record)?.to_vec(),
        })
    }
}

mod hex_array {
    use super::SIGNATORY_LEN;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; SIGNATORY_LEN], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; SIGNATORY_LEN], D::Error> {
        let s = String::deserialize(d)?;
        let bytes = hex::decode(s).map_err(D::Error::custom)?;
        bytes
            .try_into()
            .map_err(|_| D::Error::custom("signatory must be 32 bytes"))
    }
}
