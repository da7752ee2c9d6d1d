//! CRC-64 with the ECMA-182 polynomial.
//!
//! This is CRC-64/XZ: bit-reflected, with the register inverted before and
//! after each update, so that `update(update(0, a), b) == update(0, a ++ b)`.
//! The check value for `"123456789"` is `0x995D_C9BB_DF19_39FA`.

use crc::{Crc, CRC_64_XZ};

/// Shared CRC-64/XZ engine; its lookup table is built at compile time.
static ECMA: Crc<u64> = Crc::<u64>::new(&CRC_64_XZ);

/// Continue a CRC computation from `crc` over `data`.
///
/// Pass `0` to start a new checksum.
#[must_use]
pub fn update(crc: u64, data: &[u8]) -> u64 {
    // `digest_with_initial` reflects its argument into the register, which
    // must hold the inverted previous result.
    let mut digest = ECMA.digest_with_initial((!crc).reverse_bits());
    digest.update(data);
    digest.finalize()
}

/// CRC of `data` from a zero seed.
#[inline]
#[must_use]
pub fn checksum(data: &[u8]) -> u64 {
    ECMA.checksum(data)
}
