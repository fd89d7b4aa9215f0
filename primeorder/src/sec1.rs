//! SEC1 encoding of curve points: `Elliptic-Curve-Point-to-Octet-String` and its inverse, as
//! described in SEC1 §2.3.3 and §2.3.4.
//!
//! <https://www.secg.org/sec1-v2.pdf>

use crate::{Error, Result};
use core::{fmt, ops::Deref};
use primefield::MAX_FIELD_BYTES;

pub use sec1::point::Tag;

/// Maximum size of an encoded point: a tag byte followed by two coordinates.
pub const MAX_ENCODED_LEN: usize = 1 + 2 * MAX_FIELD_BYTES;

/// Coordinates of an encoded point.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Coordinates<'a> {
    /// Identity point (a.k.a. point at infinity)
    Identity,

    /// Compressed curve point
    Compressed {
        /// x-coordinate
        x: &'a [u8],

        /// Is the y-coordinate odd?
        y_is_odd: bool,
    },

    /// Uncompressed curve point
    Uncompressed {
        /// x-coordinate
        x: &'a [u8],

        /// y-coordinate
        y: &'a [u8],
    },
}

/// SEC1 encoded curve point.
///
/// Backed by a fixed-capacity buffer sized for the largest supported field, so no allocation
/// is needed. The tag and the length are validated on construction.
#[derive(Clone, Copy)]
pub struct EncodedPoint {
    buf: [u8; MAX_ENCODED_LEN],
    len: usize,
}

impl EncodedPoint {
    /// Decode an encoded point for a field whose elements serialize to `field_bytes` bytes.
    ///
    /// Validates the tag and the overall length, but not the coordinates themselves.
    pub fn from_bytes(bytes: &[u8], field_bytes: usize) -> Result<Self> {
        let tag = bytes.first().copied().ok_or(Error)?;
        let tag = Tag::from_u8(tag).map_err(|_| Error)?;

        // compact points omit the y-coordinate sign
        if tag.is_compact() {
            return Err(Error);
        }

        if bytes.len() != tag.message_len(field_bytes) || bytes.len() > MAX_ENCODED_LEN {
            return Err(Error);
        }

        let mut buf = [0u8; MAX_ENCODED_LEN];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            buf,
            len: bytes.len(),
        })
    }

    /// Encoding of the identity point: a single `0x00` byte.
    pub fn identity() -> Self {
        Self {
            buf: [0u8; MAX_ENCODED_LEN],
            len: 1,
        }
    }

    /// Encode affine coordinates, which must be serialized to the same width.
    pub fn from_affine_coordinates(x: &[u8], y: &[u8], compress: bool) -> Self {
        debug_assert_eq!(x.len(), y.len());
        let field_bytes = x.len();
        let mut buf = [0u8; MAX_ENCODED_LEN];

        let tag = if compress {
            // Same as sec1's private `Tag::compress_y`: parity of the last byte.
            if y.last().expect("empty y-coordinate") & 1 == 1 {
                Tag::CompressedOddY
            } else {
                Tag::CompressedEvenY
            }
        } else {
            Tag::Uncompressed
        };

        buf[0] = tag.into();
        buf[1..=field_bytes].copy_from_slice(x);

        if !compress {
            buf[field_bytes + 1..=2 * field_bytes].copy_from_slice(y);
        }

        let len = if compress {
            1 + field_bytes
        } else {
            1 + 2 * field_bytes
        };

        Self { buf, len }
    }

    /// Get the SEC1 tag for this [`EncodedPoint`].
    pub fn tag(&self) -> Tag {
        // Tag is validated by every constructor
        Tag::from_u8(self.buf[0]).unwrap_or(Tag::Identity)
    }

    /// Is this [`EncodedPoint`] compressed?
    pub fn is_compressed(&self) -> bool {
        self.tag().is_compressed()
    }

    /// Is this [`EncodedPoint`] the additive identity?
    pub fn is_identity(&self) -> bool {
        self.tag() == Tag::Identity
    }

    /// Get the encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Get the [`Coordinates`] for this [`EncodedPoint`].
    pub fn coordinates(&self) -> Coordinates<'_> {
        let field_bytes = (self.len - 1) / if self.is_compressed() { 1 } else { 2 };
        let (x, y) = self.buf[1..self.len].split_at(field_bytes.min(self.len - 1));

        match self.tag() {
            // compact tags never survive construction
            Tag::Identity | Tag::Compact => Coordinates::Identity,
            Tag::CompressedEvenY => Coordinates::Compressed { x, y_is_odd: false },
            Tag::CompressedOddY => Coordinates::Compressed { x, y_is_odd: true },
            Tag::Uncompressed => Coordinates::Uncompressed { x, y },
        }
    }
}

impl AsRef<[u8]> for EncodedPoint {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Deref for EncodedPoint {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for EncodedPoint {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for EncodedPoint {}

impl fmt::Debug for EncodedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedPoint(")?;
        for byte in self.as_bytes() {
            write!(f, "{byte:02X}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::{Coordinates, EncodedPoint, Tag};
    use hex_literal::hex;

    const IDENTITY_BYTES: [u8; 1] = [0];
    const UNCOMPRESSED_BYTES: [u8; 65] = hex!(
        "0411111111111111111111111111111111111111111111111111111111111111112222222222222222222222222222222222222222222222222222222222222222"
    );
    const COMPRESSED_BYTES: [u8; 33] =
        hex!("021111111111111111111111111111111111111111111111111111111111111111");

    #[test]
    fn decode_compressed_point() {
        let point = EncodedPoint::from_bytes(&COMPRESSED_BYTES, 32).unwrap();
        assert!(point.is_compressed());
        assert_eq!(point.tag(), Tag::CompressedEvenY);
        assert_eq!(point.as_bytes(), &COMPRESSED_BYTES[..]);
        assert_eq!(
            point.coordinates(),
            Coordinates::Compressed {
                x: &[0x11; 32],
                y_is_odd: false
            }
        );
    }

    #[test]
    fn decode_uncompressed_point() {
        let point = EncodedPoint::from_bytes(&UNCOMPRESSED_BYTES, 32).unwrap();
        assert!(!point.is_compressed());
        assert_eq!(
            point.coordinates(),
            Coordinates::Uncompressed {
                x: &[0x11; 32],
                y: &[0x22; 32]
            }
        );
    }

    #[test]
    fn decode_identity() {
        let point = EncodedPoint::from_bytes(&IDENTITY_BYTES, 32).unwrap();
        assert!(point.is_identity());
        assert_eq!(point, EncodedPoint::identity());
        assert_eq!(point.coordinates(), Coordinates::Identity);
    }

    #[test]
    fn decode_invalid_tag() {
        let mut bytes = COMPRESSED_BYTES;
        for tag in [1u8, 5, 0x41] {
            bytes[0] = tag;
            assert!(EncodedPoint::from_bytes(&bytes, 32).is_err());
        }
    }

    #[test]
    fn rejects_compact_points() {
        let mut bytes = COMPRESSED_BYTES;
        bytes[0] = u8::from(Tag::Compact);
        assert!(EncodedPoint::from_bytes(&bytes, 32).is_err());
        assert!(EncodedPoint::from_bytes(&bytes[..33], 32).is_err());
    }

    #[test]
    fn decode_truncated_point() {
        assert!(EncodedPoint::from_bytes(&[], 32).is_err());
        assert!(EncodedPoint::from_bytes(&COMPRESSED_BYTES[..32], 32).is_err());
        assert!(EncodedPoint::from_bytes(&UNCOMPRESSED_BYTES[..64], 32).is_err());
        assert!(EncodedPoint::from_bytes(&COMPRESSED_BYTES, 24).is_err());
    }

    #[test]
    fn encode_round_trip() {
        let compressed = EncodedPoint::from_affine_coordinates(&[0x11; 32], &[0x23; 32], true);
        assert_eq!(compressed.tag(), Tag::CompressedOddY);

        let uncompressed = EncodedPoint::from_affine_coordinates(&[0x11; 32], &[0x22; 32], false);
        assert_eq!(uncompressed.as_bytes(), &UNCOMPRESSED_BYTES[..]);
    }
}
