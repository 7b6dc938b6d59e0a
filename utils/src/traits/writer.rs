pub trait BitwiseWriteTo<W: bitstream_io::BitWrite>: Sized {
    type Error;
    fn write_to(&self, writer: &mut W) -> Result<(), Self::Error>;
}
