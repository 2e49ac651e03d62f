use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

/// Length of a notarisation identifier in bytes (160 bits)
pub const NOTARISATION_ID_LEN: usize = 20;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Notarisation id must be 20 bytes, got {len}")]
pub struct InvalidNotarisationId {
    pub len: usize,
}

/// Identifier of a notarisation record
///
/// Derived from the encoded record, never constructed freely. It is both the
/// record store key and the handle returned to the caller.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotarisationId([u8; NOTARISATION_ID_LEN]);

impl NotarisationId {
    /// Derive the identifier of an encoded record.
    ///
    /// The first 160 bits of SHA-256 over the full encoding. Identical encodings
    /// always produce identical identifiers, so re-notarising the same data at
    /// the same height lands on the same key.
    pub fn derive(encoded_record: &[u8]) -> Self {
        let digest = Sha256::digest(encoded_record);
        let mut id = [0u8; NOTARISATION_ID_LEN];
        id.copy_from_slice(&digest[..NOTARISATION_ID_LEN]);
        Self(id)
    }

    pub fn as_bytes(&self) -> &[u8; NOTARISATION_ID_LEN] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl TryFrom<&[u8]> for NotarisationId {
    type Error = InvalidNotarisationId;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let id: [u8; NOTARISATION_ID_LEN] = bytes
            .try_into()
            .map_err(|_| InvalidNotarisationId { len: bytes.len() })?;
        Ok(Self(id))
    }
}

impl From<[u8; NOTARISATION_ID_LEN]> for NotarisationId {
    fn from(bytes: [u8; NOTARISATION_ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for NotarisationId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for NotarisationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for NotarisationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NotarisationId({})", self.to_hex())
    }
}
