//! Integration tests for key adapters.

use kvingest_core::types::{encode_int_row_id, MIN_ROW_ID, ZERO_ROW_ID};
use kvingest_core::{CoreError, DupDetectKeyAdapter, KeyAdapter, KeyAdapterKind, RowId};

#[test]
fn duplicate_keys_decode_and_sort() {
    let adapter = KeyAdapterKind::DupDetect;
    let keys: [&[u8]; 3] = [b"a", b"a", b"b"];
    let row_ids = [encode_int_row_id(1), encode_int_row_id(2), encode_int_row_id(3)];

    let encoded: Vec<Vec<u8>> = keys
        .iter()
        .zip(&row_ids)
        .map(|(key, row_id)| adapter.encode_to_vec(key, RowId::new(row_id).unwrap()))
        .collect();

    for (enc, key) in encoded.iter().zip(keys) {
        assert_eq!(adapter.decode_to_vec(enc).unwrap(), key);
    }

    assert_ne!(encoded[0], encoded[1]);
    assert_ne!(encoded[1], encoded[2]);
    assert_ne!(encoded[0], encoded[2]);
    assert!(encoded[0] < encoded[1]);
    assert!(encoded[1] < encoded[2]);
}

#[test]
fn sentinel_row_ids_bound_a_key() {
    let adapter = DupDetectKeyAdapter;
    let lower = adapter.encode_to_vec(b"k", RowId::new(&MIN_ROW_ID).unwrap());
    let zero = adapter.encode_to_vec(b"k", RowId::new(&ZERO_ROW_ID).unwrap());

    for handle in [i64::MIN + 1, -7, 0, 7, i64::MAX] {
        let row_id = encode_int_row_id(handle);
        let key = adapter.encode_to_vec(b"k", RowId::new(&row_id).unwrap());
        assert!(lower < key, "MIN_ROW_ID should bound handle {handle}");
        assert_eq!(key >= zero, handle >= 0, "ZERO_ROW_ID splits signs for {handle}");
    }
}

#[test]
fn sorting_encoded_keys_groups_duplicates() {
    let adapter = DupDetectKeyAdapter;
    let rows = [("user:2", 10), ("user:1", 11), ("user:2", 3), ("user:10", 4), ("user:1", 1)];

    let mut encoded: Vec<Vec<u8>> = rows
        .iter()
        .map(|(key, handle)| {
            let row_id = encode_int_row_id(*handle);
            adapter.encode_to_vec(key.as_bytes(), RowId::new(&row_id).unwrap())
        })
        .collect();
    encoded.sort();

    let decoded: Vec<String> = encoded
        .iter()
        .map(|k| String::from_utf8(adapter.decode_to_vec(k).unwrap()).unwrap())
        .collect();
    assert_eq!(decoded, ["user:1", "user:1", "user:10", "user:2", "user:2"]);
}

#[test]
fn truncated_input_is_reported() {
    let err = DupDetectKeyAdapter.decode_to_vec(b"x").unwrap_err();
    assert!(err.is_truncated());
    assert_eq!(err.to_string(), "insufficient bytes to decode value: need 2, have 1");

    let too_long = vec![0u8; 65_536];
    assert!(matches!(RowId::new(&too_long), Err(CoreError::RowIdTooLong { len: 65_536, .. })));
}
