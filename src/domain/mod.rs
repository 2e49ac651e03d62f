pub mod codec;
mod id;
mod record;

pub use codec::{
    decode_document_hash, decode_height, decode_signatory, derive_id, encode_record, DecodeError,
};
pub use id::{InvalidNotarisationId, NotarisationId, NOTARISATION_ID_LEN};
pub use record::{
    DocumentHash, FieldError, NotarisationRecord, Signatory, ValidationPolicy,
    DEFAULT_MIN_DOCUMENT_HASH_LEN, SIGNATORY_LEN,
};
