/// A type that can be encoded into a sequence of bytes.
///
/// Every command packet in [`commands`](crate::commands) implements this
/// trait. The encoded form is always the command's opcode byte followed by
/// its data bytes, in wire order.
pub trait Encode {
    /// Returns the number of bytes this value will take when encoded.
    fn size(&self) -> usize;

    /// Encodes this instance into the provided byte slice.
    ///
    /// The slice must be at least [`size`](Encode::size) bytes long.
    fn encode(&self, data: &mut [u8]);
}
