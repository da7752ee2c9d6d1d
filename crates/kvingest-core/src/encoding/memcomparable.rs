//! Memory-comparable encoding for byte strings and integers.
//!
//! # Byte Strings
//!
//! Input is cut into groups of [`GROUP_SIZE`] bytes. Each group is written as
//! eight data bytes followed by a marker:
//!
//! ```text
//! [b0 b1 b2 b3 b4 b5 b6 b7][0xFF]          full group
//! [b0 b1 b2 00 00 00 00 00][0xFF - 5]      final group, 5 pad bytes
//! ```
//!
//! The final group always has at least one pad byte slot accounted for in its
//! marker, so an input whose length is a multiple of eight ends with an
//! all-padding group (`00 00 00 00 00 00 00 00 F7`). Comparing encodings byte by
//! byte yields the same order as comparing the inputs:
//! `"" < "a" < "a\0" < "ab" < "b"`.
//!
//! # Integers
//!
//! Signed integers are stored big-endian with the sign bit flipped so that
//! negative values sort before positive ones.
//!
//! # Example
//!
//! ```
//! use kvingest_core::encoding::memcomparable::{decode_bytes, encode_bytes, encoded_bytes_len};
//!
//! let mut buf = Vec::new();
//! encode_bytes(&mut buf, b"hello");
//! assert_eq!(buf.len(), encoded_bytes_len(5));
//!
//! let (decoded, consumed) = decode_bytes(&buf).unwrap();
//! assert_eq!(decoded, b"hello");
//! assert_eq!(consumed, buf.len());
//! ```

use crate::{CoreError, CoreResult};

/// Number of data bytes per group.
pub const GROUP_SIZE: usize = 8;

/// Marker for a full group; partial groups subtract their pad count.
const MARKER: u8 = 0xFF;
const PAD: u8 = 0x00;

/// Encoded size of one group including its marker.
const ENCODED_GROUP_SIZE: usize = GROUP_SIZE + 1;

/// Constant for flipping the sign bit of signed integers.
const SIGN_FLIP_I64: u64 = 0x8000_0000_0000_0000;

/// Exact encoded length of a byte string of `len` bytes.
#[inline]
#[must_use]
pub const fn encoded_bytes_len(len: usize) -> usize {
    (len / GROUP_SIZE + 1) * ENCODED_GROUP_SIZE
}

/// Append the memory-comparable encoding of `data` to `dst`.
pub fn encode_bytes(dst: &mut Vec<u8>, data: &[u8]) {
    dst.reserve(encoded_bytes_len(data.len()));

    let mut groups = data.chunks_exact(GROUP_SIZE);
    for group in &mut groups {
        dst.extend_from_slice(group);
        dst.push(MARKER);
    }

    let tail = groups.remainder();
    let pad_count = GROUP_SIZE - tail.len();
    dst.extend_from_slice(tail);
    dst.resize(dst.len() + pad_count, PAD);
    // pad_count is in 1..=8
    dst.push(MARKER - pad_count as u8);
}

/// Decode one memory-comparable byte string from the front of `data`,
/// appending the result to `dst`.
///
/// Returns the number of input bytes consumed. Bytes after the encoded string
/// are left untouched. On error `dst` is restored to its original length.
///
/// # Errors
///
/// - [`CoreError::InsufficientBytes`] if a group is cut short
/// - [`CoreError::InvalidMarker`] if a marker implies more than eight pad bytes
/// - [`CoreError::InvalidPadding`] if a pad byte is not zero
pub fn decode_bytes_into(data: &[u8], dst: &mut Vec<u8>) -> CoreResult<usize> {
    let original_len = dst.len();
    let result = decode_groups(data, dst);
    if result.is_err() {
        dst.truncate(original_len);
    }
    result
}

fn decode_groups(data: &[u8], dst: &mut Vec<u8>) -> CoreResult<usize> {
    let mut offset = 0;
    loop {
        let rest = &data[offset..];
        if rest.len() < ENCODED_GROUP_SIZE {
            return Err(CoreError::insufficient(ENCODED_GROUP_SIZE, rest.len()));
        }

        let group = &rest[..ENCODED_GROUP_SIZE];
        let marker = group[GROUP_SIZE];
        let pad_count = usize::from(MARKER - marker);
        if pad_count > GROUP_SIZE {
            return Err(CoreError::InvalidMarker { marker, group: group.to_vec() });
        }

        let real_size = GROUP_SIZE - pad_count;
        dst.extend_from_slice(&group[..real_size]);
        offset += ENCODED_GROUP_SIZE;

        if pad_count != 0 {
            if group[real_size..GROUP_SIZE].iter().any(|&b| b != PAD) {
                return Err(CoreError::InvalidPadding { group: group.to_vec() });
            }
            return Ok(offset);
        }
    }
}

/// Decode one memory-comparable byte string from the front of `data`.
///
/// Returns the decoded bytes and the number of input bytes consumed.
///
/// # Errors
///
/// See [`decode_bytes_into`].
pub fn decode_bytes(data: &[u8]) -> CoreResult<(Vec<u8>, usize)> {
    let mut out = Vec::with_capacity(data.len() / ENCODED_GROUP_SIZE * GROUP_SIZE);
    let consumed = decode_bytes_into(data, &mut out)?;
    Ok((out, consumed))
}

/// Append the memory-comparable encoding of a signed integer (8 bytes).
#[inline]
pub fn encode_int(dst: &mut Vec<u8>, value: i64) {
    dst.extend_from_slice(&((value as u64) ^ SIGN_FLIP_I64).to_be_bytes());
}
