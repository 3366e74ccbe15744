//! Fixed-width big-endian integer encoding for the wire value layout.

use bytes::{BufMut, BytesMut};

use crate::error::CompileError;

/// Encode `value` as a big-endian byte sequence exactly `bits / 8` bytes long.
///
/// `bits` must be a multiple of 8, and `value` must be representable in
/// `bits` bits; out-of-range values are rejected rather than truncated.
pub fn encode_uint(value: u64, bits: u32) -> Result<Vec<u8>, CompileError> {
    if bits & 0x7 != 0 {
        return Err(CompileError::Alignment { bits });
    }
    if bits < u64::BITS && value >> bits != 0 {
        return Err(CompileError::Range { value, bits });
    }
    let byte_count = (bits >> 3) as usize;
    let mut out = Vec::with_capacity(byte_count);
    for i in (0..byte_count).rev() {
        out.push(value.checked_shr(i as u32 * 8).unwrap_or(0) as u8);
    }
    Ok(out)
}

pub fn put_u16(dst: &mut BytesMut, value: u16) {
    dst.put_u16(value);
}

pub fn put_u32(dst: &mut BytesMut, value: u32) {
    dst.put_u32(value);
}

pub fn put_u64(dst: &mut BytesMut, value: u64) {
    dst.put_u64(value);
}
