use bitstream_io::{BigEndian, BitWrite, BitWriter};
use utils::traits::{fixed_packet::FixedPacket, writer::BitwiseWriteTo};

use crate::errors::{SbcCodecError, SbcCodecResult};

use super::SbcCodecElement;

impl<W: BitWrite> BitwiseWriteTo<W> for SbcCodecElement {
    type Error = SbcCodecError;
    fn write_to(&self, writer: &mut W) -> Result<(), Self::Error> {
        writer.write::<4, u8>(self.sampling_frequency_code)?;
        writer.write::<4, u8>(self.channel_mode_code)?;
        writer.write::<4, u8>(self.block_length_code)?;
        writer.write::<2, u8>(self.subbands_code)?;
        writer.write::<2, u8>(self.allocation_method_code)?;
        writer.write::<8, u8>(self.min_bitpool)?;
        writer.write::<8, u8>(self.max_bitpool)?;
        Ok(())
    }
}

impl SbcCodecElement {
    pub fn to_bytes(&self) -> SbcCodecResult<Vec<u8>> {
        let mut writer = BitWriter::endian(Vec::with_capacity(Self::bytes_count()), BigEndian);
        self.write_to(&mut writer)?;
        Ok(writer.into_writer())
    }
}
