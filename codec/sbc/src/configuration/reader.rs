use bitstream_io::{BigEndian, BitRead, BitReader};
use utils::traits::{
    fixed_packet::FixedPacket,
    reader::{BitwiseReadFrom, TryReadFromBytes},
};

use crate::errors::SbcCodecError;

use super::SbcCodecElement;

impl<R: BitRead> BitwiseReadFrom<R> for SbcCodecElement {
    type Error = SbcCodecError;
    fn read_from(reader: &mut R) -> Result<Self, Self::Error> {
        let sampling_frequency_code = reader.read::<4, u8>()?;
        let channel_mode_code = reader.read::<4, u8>()?;
        let block_length_code = reader.read::<4, u8>()?;
        let subbands_code = reader.read::<2, u8>()?;
        let allocation_method_code = reader.read::<2, u8>()?;
        let min_bitpool = reader.read::<8, u8>()?;
        let max_bitpool = reader.read::<8, u8>()?;
        Ok(Self {
            sampling_frequency_code,
            channel_mode_code,
            block_length_code,
            subbands_code,
            allocation_method_code,
            min_bitpool,
            max_bitpool,
        })
    }
}

impl TryReadFromBytes for SbcCodecElement {
    type Error = SbcCodecError;
    fn try_read_from_bytes(bytes: &[u8]) -> Result<Option<Self>, Self::Error> {
        if bytes.len() < Self::bytes_count() {
            return Ok(None);
        }
        let mut reader = BitReader::endian(bytes, BigEndian);
        Ok(Some(Self::read_from(&mut reader)?))
    }
}
