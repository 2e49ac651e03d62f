//! Capabilities supplied by the host for each notarisation.
//!
//! The notary never reads ambient state: who witnessed a request and the
//! current chain height are handed in by whoever invokes an operation.

use crate::domain::{DocumentHash, Signatory};
use ed25519_dalek::{Signature, Verifier, VerifyingKey};

/// Answers whether the current request is attributable to a key holder
pub trait AuthorizationOracle {
    fn is_witnessed_by(&self, signatory: &Signatory) -> bool;
}

/// Supplies the current chain height
pub trait HeightProvider {
    fn current_height(&self) -> u32;
}

/// Height handed over by the host for the request being processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHeight(pub u32);

impl HeightProvider for FixedHeight {
    fn current_height(&self) -> u32 {
        self.0
    }
}

/// Refuses every request
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

impl AuthorizationOracle for DenyAll {
    fn is_witnessed_by(&self, _signatory: &Signatory) -> bool {
        false
    }
}

/// Witness carried alongside a notarise request: an Ed25519 signature over
/// the document hash
///
/// The signatory is read as an Ed25519 verifying key. Keys that are not valid
/// curve points and malformed signatures both mean "not witnessed".
#[derive(Debug, Clone)]
pub struct Ed25519Witness {
    message: Vec<u8>,
    signature: Option<Signature>,
}

impl Ed25519Witness {
    pub fn new(document_hash: &[u8], signature: &[u8]) -> Self {
        Self {
            message: document_hash.to_vec(),
            signature: Signature::from_slice(signature).ok(),
        }
    }

    pub fn for_document(document_hash: &DocumentHash, signature: &[u8]) -> Self {
        Self::new(document_hash.as_bytes(), signature)
    }
}

impl AuthorizationOracle for Ed25519Witness {
    fn is_witnessed_by(&self, signatory: &Signatory) -> bool {
        let Some(signature) = &self.signature else {
            return false;
        };
        let Ok(key) = VerifyingKey::from_bytes(signatory.as_bytes()) else {
            return false;
        };
        key.verify(&self.message, signature).is_ok()
    }
}
