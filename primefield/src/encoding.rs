//! Big-endian encoding of fixed-capacity integers at a runtime byte width.

use crate::{Error, MAX_FIELD_BYTES, Result, Uint};
use core::{fmt, ops::Deref};
use zeroize::Zeroize;

/// Serialized field element: big-endian, zero padded to the field's byte width.
///
/// Backed by a fixed-capacity buffer so no allocation is needed.
#[derive(Clone, Copy)]
pub struct FieldBytes {
    buf: [u8; MAX_FIELD_BYTES],
    len: usize,
}

impl FieldBytes {
    /// Encode `uint` big-endian into exactly `len` bytes.
    ///
    /// Any bits of `uint` above `8 * len` are discarded, so callers must ensure the value fits.
    pub(crate) fn from_uint(uint: &Uint, len: usize) -> Self {
        debug_assert!(len <= MAX_FIELD_BYTES);
        let full = uint_to_be_array(uint);
        let mut buf = [0u8; MAX_FIELD_BYTES];
        buf[..len].copy_from_slice(&full[MAX_FIELD_BYTES - len..]);
        Self { buf, len }
    }

    /// Borrow the encoded bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl AsRef<[u8]> for FieldBytes {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl Deref for FieldBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl PartialEq for FieldBytes {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for FieldBytes {}

impl fmt::Debug for FieldBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldBytes(")?;
        for byte in self.as_slice() {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

impl Zeroize for FieldBytes {
    fn zeroize(&mut self) {
        self.buf.zeroize();
    }
}

/// Serialize `uint` as a full-width big-endian byte array.
pub(crate) fn uint_to_be_array(uint: &Uint) -> [u8; MAX_FIELD_BYTES] {
    const WORD_BYTES: usize = core::mem::size_of::<bigint::Word>();
    let mut out = [0u8; MAX_FIELD_BYTES];

    for (chunk, word) in out
        .chunks_exact_mut(WORD_BYTES)
        .zip(uint.as_words().iter().rev())
    {
        chunk.copy_from_slice(&word.to_be_bytes());
    }

    out
}

/// Parse a big-endian byte slice of at most [`MAX_FIELD_BYTES`] bytes.
pub(crate) fn uint_from_be_slice(bytes: &[u8]) -> Result<Uint> {
    if bytes.len() > MAX_FIELD_BYTES {
        return Err(Error);
    }

    let mut padded = [0u8; MAX_FIELD_BYTES];
    padded[MAX_FIELD_BYTES - bytes.len()..].copy_from_slice(bytes);
    Ok(Uint::from_be_slice(&padded))
}
