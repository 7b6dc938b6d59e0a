pub mod fixed_packet;
pub mod reader;
pub mod writer;
