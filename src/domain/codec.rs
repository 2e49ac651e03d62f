//! Fixed-layout encoding of notarisation records.
//!
//! ```text
//!     0 - 3            4 - 35                 36 - *
//! [Block Height] [Signatory Public Key] [Registered Document Hash]
//! ```
//!
//! The height is little-endian. There are no delimiters or length prefixes:
//! the first two fields sit at fixed offsets and the document hash is the
//! remainder of the buffer.

use super::id::NotarisationId;
use super::record::SIGNATORY_LEN;
use thiserror::Error;

pub const HEIGHT_LEN: usize = 4;
pub const SIGNATORY_OFFSET: usize = HEIGHT_LEN;
pub const DOCUMENT_HASH_OFFSET: usize = SIGNATORY_OFFSET + SIGNATORY_LEN;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Encoded record is {len} bytes, shorter than the 36-byte fixed prefix")]
    RecordTooShort { len: usize },
}

/// Encode notarisation details.
///
/// Performs no validation: the caller guarantees a 32-byte signatory and a
/// document hash meeting the minimum length. The result is exactly
/// `4 + 32 + document_hash.len()` bytes.
pub fn encode_record(height: u32, signatory: &[u8], document_hash: &[u8]) -> Vec<u8> {
    let mut encoded = Vec::with_capacity(HEIGHT_LEN + signatory.len() + document_hash.len());
    encoded.extend_from_slice(&height.to_le_bytes());
    encoded.extend_from_slice(signatory);
    encoded.extend_from_slice(document_hash);
    encoded
}

/// Derive the 20-byte identifier of an encoded record.
pub fn derive_id(encoded_record: &[u8]) -> NotarisationId {
    NotarisationId::derive(encoded_record)
}

fn check_prefix(encoded_record: &[u8]) -> Result<(), DecodeError> {
    if encoded_record.len() < DOCUMENT_HASH_OFFSET {
        return Err(DecodeError::RecordTooShort {
            len: encoded_record.len(),
        });
    }
    Ok(())
}

pub fn decode_height(encoded_record: &[u8]) -> Result<u32, DecodeError> {
    check_prefix(encoded_record)?;
    let mut height = [0u8; HEIGHT_LEN];
    height.copy_from_slice(&encoded_record[..HEIGHT_LEN]);
    Ok(u32::from_le_bytes(height))
}

pub fn decode_signatory(encoded_record: &[u8]) -> Result<[u8; SIGNATORY_LEN], DecodeError> {
    check_prefix(encoded_record)?;
    let mut signatory = [0u8; SIGNATORY_LEN];
    signatory.copy_from_slice(&encoded_record[SIGNATORY_OFFSET..DOCUMENT_HASH_OFFSET]);
    Ok(signatory)
}

/// Everything after the signatory.
pub fn decode_document_hash(encoded_record: &[u8]) -> Result<&[u8], DecodeError> {
    check_prefix(encoded_record)?;
    Ok(&encoded_record[DOCUMENT_HASH_OFFSET..])
}
