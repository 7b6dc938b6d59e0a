pub trait BitwiseReadFrom<R: bitstream_io::BitRead>: Sized {
    type Error;
    fn read_from(reader: &mut R) -> Result<Self, Self::Error>;
}

/// Reads a value that may legitimately be absent from the input,
/// e.g. when the buffer is shorter than the fixed layout requires.
pub trait TryReadFromBytes: Sized {
    type Error;
    fn try_read_from_bytes(bytes: &[u8]) -> Result<Option<Self>, Self::Error>;
}
