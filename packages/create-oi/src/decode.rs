use thiserror::Error;

/// Errors produced while decoding buffered Open Interface data.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unexpected end of data")]
    UnexpectedEnd,

    /// The byte read as a sensor packet identifier is not in the payload
    /// length table. The stream position relative to packet boundaries is
    /// undefined after this; callers should treat it as a
    /// desynchronization signal.
    #[error("unknown sensor packet id: {0}")]
    UnknownPacketId(u8),
}

/// A type that can be reconstructed (decoded) from a raw sequence of bytes.
///
/// On success, the input slice is advanced by the number of bytes consumed.
/// Multi-byte integers are big-endian, as everywhere in the Open Interface.
pub trait Decode {
    /// Attempts to decode `Self` from the beginning of the provided byte
    /// slice.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the input is malformed or insufficient
    /// to decode a complete value of this type.
    fn decode(data: &mut &[u8]) -> Result<Self, DecodeError>
    where
        Self: Sized;
}

macro_rules! impl_decode_for_primitive {
    ($($t:ty),*) => {
        $(
            impl Decode for $t {
                fn decode(data: &mut &[u8]) -> Result<Self, DecodeError> {
                    let bytes = data
                        .get(..size_of::<Self>())
                        .ok_or(DecodeError::UnexpectedEnd)?;
                    *data = &data[size_of::<Self>()..];
                    Ok(Self::from_be_bytes(bytes.try_into().unwrap()))
                }
            }
        )*
    };
}

impl_decode_for_primitive!(u8, u16, i16);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_are_big_endian() {
        let mut data = [0x01, 0xF4, 0xFF, 0x38, 0x2A].as_slice();

        assert_eq!(u16::decode(&mut data), Ok(500));
        assert_eq!(i16::decode(&mut data), Ok(-200));
        assert_eq!(u8::decode(&mut data), Ok(0x2A));
        assert!(data.is_empty());
    }

    #[test]
    fn short_input() {
        let mut data = [0x01].as_slice();
        assert_eq!(i16::decode(&mut data), Err(DecodeError::UnexpectedEnd));
    }
}
