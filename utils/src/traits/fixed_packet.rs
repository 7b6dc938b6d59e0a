pub trait FixedPacket {
    fn bytes_count() -> usize;
}
