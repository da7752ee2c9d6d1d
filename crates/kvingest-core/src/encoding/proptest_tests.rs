//! Property-based tests for the byte codec and key adapters.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;

use super::key_adapter::{DupDetectKeyAdapter, KeyAdapter, KeyAdapterKind, NoopKeyAdapter};
use super::memcomparable::{decode_bytes, encode_bytes, encoded_bytes_len};
use crate::types::{RowId, MAX_ROW_ID_LEN};

/// Strategy for application keys. Small alphabet so that shared prefixes and
/// equal keys show up often.
fn arb_key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(prop::sample::select(vec![0x00u8, 0x01, b'a', b'b', 0xFF]), 0..20),
        prop::collection::vec(any::<u8>(), 0..40),
    ]
}

/// Strategy for row ids within the trailer limit.
fn arb_row_id() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..24)
}

fn row(bytes: &[u8]) -> RowId<'_> {
    RowId::new(bytes).expect("row id within limit")
}

proptest! {
    #[test]
    fn memcomparable_roundtrip(data in prop::collection::vec(any::<u8>(), 0..100)) {
        let mut buf = Vec::new();
        encode_bytes(&mut buf, &data);
        prop_assert_eq!(buf.len(), encoded_bytes_len(data.len()));

        let (decoded, consumed) = decode_bytes(&buf).expect("decoding should succeed");
        prop_assert_eq!(decoded, data);
        prop_assert_eq!(consumed, buf.len());
    }

    #[test]
    fn memcomparable_preserves_order(a in arb_key(), b in arb_key()) {
        let mut ea = Vec::new();
        let mut eb = Vec::new();
        encode_bytes(&mut ea, &a);
        encode_bytes(&mut eb, &b);
        prop_assert_eq!(a.cmp(&b), ea.cmp(&eb));
    }

    #[test]
    fn dup_detect_orders_by_application_key(
        k1 in arb_key(),
        k2 in arb_key(),
        r1 in arb_row_id(),
        r2 in arb_row_id(),
    ) {
        prop_assume!(k1 != k2);
        let e1 = DupDetectKeyAdapter.encode_to_vec(&k1, row(&r1));
        let e2 = DupDetectKeyAdapter.encode_to_vec(&k2, row(&r2));
        prop_assert_eq!(k1.cmp(&k2), e1.cmp(&e2));
    }

    #[test]
    fn dup_detect_keys_are_unique(key in arb_key(), r1 in arb_row_id(), r2 in arb_row_id()) {
        prop_assume!(r1 != r2);
        let e1 = DupDetectKeyAdapter.encode_to_vec(&key, row(&r1));
        let e2 = DupDetectKeyAdapter.encode_to_vec(&key, row(&r2));
        prop_assert_ne!(e1, e2);
    }

    #[test]
    fn same_length_row_ids_keep_their_order(
        key in arb_key(),
        r1 in any::<[u8; 8]>(),
        r2 in any::<[u8; 8]>(),
    ) {
        let e1 = DupDetectKeyAdapter.encode_to_vec(&key, row(&r1));
        let e2 = DupDetectKeyAdapter.encode_to_vec(&key, row(&r2));
        prop_assert_eq!(r1.cmp(&r2), e1.cmp(&e2));
    }

    #[test]
    fn adapters_roundtrip(
        key in arb_key(),
        row_id in arb_row_id(),
        prefix in prop::collection::vec(any::<u8>(), 0..8),
        dup_detect in any::<bool>(),
    ) {
        let adapter = KeyAdapterKind::for_duplicate_detection(dup_detect);

        let mut encoded = prefix.clone();
        adapter.encode(&mut encoded, &key, row(&row_id));
        prop_assert_eq!(encoded.len() - prefix.len(), adapter.encoded_len(&key, row(&row_id)));
        prop_assert_eq!(&encoded[..prefix.len()], &prefix[..]);

        let mut decoded = prefix.clone();
        adapter.decode(&mut decoded, &encoded[prefix.len()..]).expect("decoding should succeed");
        prop_assert_eq!(&decoded[..prefix.len()], &prefix[..]);
        prop_assert_eq!(&decoded[prefix.len()..], &key[..]);
    }

    #[test]
    fn noop_len_is_key_len(key in arb_key(), row_id in arb_row_id()) {
        prop_assert_eq!(NoopKeyAdapter.encoded_len(&key, row(&row_id)), key.len());
    }

    #[test]
    fn dup_detect_decode_never_panics(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = DupDetectKeyAdapter.decode_to_vec(&data);
    }
}

#[test]
fn max_length_row_id_roundtrips() {
    let row_id = vec![0xAB; MAX_ROW_ID_LEN];
    let encoded = DupDetectKeyAdapter.encode_to_vec(b"key", row(&row_id));
    assert_eq!(encoded.len(), encoded_bytes_len(3) + MAX_ROW_ID_LEN + 2);
    assert_eq!(DupDetectKeyAdapter.decode_to_vec(&encoded).unwrap(), b"key");
}
