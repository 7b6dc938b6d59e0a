//! Decoding of the A2DP SBC codec information element and the nominal
//! bitrate it implies.

pub mod bitrate;
pub mod configuration;
pub mod errors;
