use notary::domain::{
    decode_document_hash, decode_height, decode_signatory, derive_id, encode_record,
    NotarisationRecord, NOTARISATION_ID_LEN,
};
use proptest::prelude::*;

fn sequential(len: usize) -> Vec<u8> {
    (0..len as u8).collect()
}

#[cfg(test)]
mod layout_tests {
    use super::*;

    #[test]
    fn test_encoded_length_is_prefix_plus_document_hash() {
        for len in [16usize, 20, 32, 64, 1024] {
            let encoded = encode_record(1, &[0u8; 32], &vec![0xEE; len]);
            assert_eq!(encoded.len(), 4 + 32 + len);
        }
    }

    #[test]
    fn test_height_100_encodes_as_64_00_00_00() {
        let encoded = encode_record(100, &sequential(32), &sequential(16));

        assert_eq!(encoded.len(), 52);
        assert_eq!(hex::encode(&encoded[..4]), "64000000");
    }

    #[test]
    fn test_derive_id_is_twenty_bytes_and_deterministic() {
        let first = derive_id(&encode_record(7, &sequential(32), &sequential(16)));
        let second = derive_id(&encode_record(7, &sequential(32), &sequential(16)));

        assert_eq!(first.as_bytes().len(), NOTARISATION_ID_LEN);
        assert_eq!(first, second);
    }

    #[test]
    fn test_height_changes_identifier() {
        let at_1 = derive_id(&encode_record(1, &sequential(32), &sequential(16)));
        let at_2 = derive_id(&encode_record(2, &sequential(32), &sequential(16)));

        assert_ne!(at_1, at_2);
    }
}

proptest! {
    #[test]
    fn prop_layout_preserves_fields(
        height in any::<u32>(),
        signatory in prop::array::uniform32(any::<u8>()),
        document_hash in prop::collection::vec(any::<u8>(), 16..256),
    ) {
        let encoded = encode_record(height, &signatory, &document_hash);

        prop_assert_eq!(u32::from_le_bytes([encoded[0], encoded[1], encoded[2], encoded[3]]), height);
        prop_assert_eq!(&encoded[4..36], &signatory[..]);
        prop_assert_eq!(&encoded[36..], document_hash.as_slice());

        prop_assert_eq!(decode_height(&encoded).unwrap(), height);
        prop_assert_eq!(decode_signatory(&encoded).unwrap(), signatory);
        prop_assert_eq!(decode_document_hash(&encoded).unwrap(), document_hash.as_slice());
    }

    #[test]
    fn prop_record_decode_inverts_encode(
        height in any::<u32>(),
        signatory in prop::array::uniform32(any::<u8>()),
        document_hash in prop::collection::vec(any::<u8>(), 16..128),
    ) {
        let encoded = encode_record(height, &signatory, &document_hash);
        let record = NotarisationRecord::decode(&encoded).unwrap();

        prop_assert_eq!(record.height, height);
        prop_assert_eq!(record.signatory, signatory);
        prop_assert_eq!(&record.document_hash, &document_hash);
        prop_assert_eq!(record.encode(), encoded);
    }

    #[test]
    fn prop_derive_id_is_deterministic(encoded in prop::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(derive_id(&encoded), derive_id(&encoded.clone()));
    }
}
