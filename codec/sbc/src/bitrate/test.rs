#[cfg(test)]
mod test {
    use crate::{
        bitrate::{SbcBitrateParams, SbcFrameLayout, calculate_bitrate},
        configuration::{SbcConfiguration, channel_mode::ChannelMode},
    };

    fn params(
        bitpool: u32,
        sample_rate: u32,
        channel_mode: ChannelMode,
        block_length: u32,
        subbands: u32,
    ) -> SbcBitrateParams {
        SbcBitrateParams {
            bitpool,
            sample_rate,
            channel_mode,
            block_length,
            subbands,
        }
    }

    #[test]
    fn test_zero_inputs_yield_none() {
        let valid = params(53, 44100, ChannelMode::JointStereo, 16, 8);
        assert!(calculate_bitrate(&valid).is_some());
        assert_eq!(calculate_bitrate(&SbcBitrateParams { bitpool: 0, ..valid }), None);
        assert_eq!(
            calculate_bitrate(&SbcBitrateParams {
                sample_rate: 0,
                ..valid
            }),
            None
        );
        assert_eq!(
            calculate_bitrate(&SbcBitrateParams {
                block_length: 0,
                ..valid
            }),
            None
        );
        assert_eq!(calculate_bitrate(&SbcBitrateParams { subbands: 0, ..valid }), None);
    }

    #[test]
    fn test_joint_stereo_frame_layout() {
        let layout = SbcFrameLayout::new(&params(53, 44100, ChannelMode::JointStereo, 16, 8))
            .unwrap();
        assert_eq!(layout.channels, 2);
        assert_eq!(layout.payload_bits, 840);
        assert_eq!(layout.scale_factor_bytes, 8);
        assert_eq!(layout.frame_length, 117);
        assert_eq!(layout.samples_per_frame, 128);
        assert_eq!(layout.bitrate(44100), Some(322481));
    }

    #[test]
    fn test_joint_stereo_small_bitpool_fallback() {
        // 4 * 1 - 8 would be negative, the plain product of 4 is used instead
        let joint = params(1, 44100, ChannelMode::JointStereo, 4, 8);
        let layout = SbcFrameLayout::new(&joint).unwrap();
        assert_eq!(layout.payload_bits, 4);
        assert_eq!(layout.frame_length, 4 + 8 + 1);
        // (13 * 8 * 44100 + 16) / 32
        assert_eq!(calculate_bitrate(&joint), Some(143325));
        // stereo shares the payload rule and the channel count here
        assert_eq!(
            calculate_bitrate(&joint),
            calculate_bitrate(&params(1, 44100, ChannelMode::Stereo, 4, 8))
        );

        // exactly zero also falls back
        let layout =
            SbcFrameLayout::new(&params(2, 44100, ChannelMode::JointStereo, 4, 8)).unwrap();
        assert_eq!(layout.payload_bits, 8);
    }

    #[test]
    fn test_channel_mode_branches() {
        let mono = SbcFrameLayout::new(&params(31, 48000, ChannelMode::Mono, 16, 8)).unwrap();
        assert_eq!(mono.channels, 1);
        assert_eq!(mono.payload_bits, 496);
        assert_eq!(mono.scale_factor_bytes, 4);
        assert_eq!(mono.frame_length, 4 + 4 + 62);
        // 70 * 8 * 48000 / 128
        assert_eq!(mono.bitrate(48000), Some(210000));

        let stereo = SbcFrameLayout::new(&params(53, 44100, ChannelMode::Stereo, 16, 8)).unwrap();
        assert_eq!(stereo.payload_bits, 848);
        assert_eq!(stereo.frame_length, 4 + 8 + 106);

        let dual =
            SbcFrameLayout::new(&params(53, 44100, ChannelMode::DualChannel, 16, 8)).unwrap();
        assert_eq!(dual.payload_bits, 1696);
        assert_eq!(dual.frame_length, 4 + 8 + 212);
        // (224 * 8 * 44100 + 64) / 128 = 617400
        assert_eq!(dual.bitrate(44100), Some(617400));
    }

    #[test]
    fn test_rounds_half_up() {
        // 7 byte frames, 16 samples: 7 * 8 * 16000 / 16 is exact
        assert_eq!(
            calculate_bitrate(&params(2, 16000, ChannelMode::Mono, 4, 4)),
            Some(56000)
        );
        // 7 * 8 * 16003 / 16 = 56010.5, half rounds away from even
        assert_eq!(
            calculate_bitrate(&params(2, 16003, ChannelMode::Mono, 4, 4)),
            Some(56011)
        );
        // 18 byte frames, 96 samples
        assert_eq!(
            calculate_bitrate(&params(4, 44100, ChannelMode::Stereo, 12, 8)),
            Some(66150)
        );
    }

    #[test]
    fn test_overflow_yields_none() {
        assert_eq!(
            calculate_bitrate(&params(u32::MAX, u32::MAX, ChannelMode::DualChannel, u32::MAX, 8)),
            None
        );
    }

    #[test]
    fn test_configuration_bitrate() {
        let config = SbcConfiguration::decode(&[0x21, 0x15, 0x02, 0x35], None).unwrap();
        assert_eq!(config.bitrate(None), Some(322481));
        assert_eq!(config.frame_layout(None).unwrap().frame_length, 117);

        // an override replaces the negotiated maximum
        assert_eq!(
            config.bitrate(Some(35)),
            calculate_bitrate(&params(35, 44100, ChannelMode::JointStereo, 16, 8))
        );
        assert_eq!(config.bitrate(Some(0)), None);
    }

    #[test]
    fn test_configuration_defaults_block_length_and_subbands() {
        // byte 1 is all zero: no block length, subbands or allocation
        let config = SbcConfiguration::decode(&[0x21, 0x00, 0x02, 0x35], None).unwrap();
        assert_eq!(config.block_length(), None);
        assert_eq!(config.subbands(), None);
        let params = config.bitrate_params(None).unwrap();
        assert_eq!(params.block_length, 16);
        assert_eq!(params.subbands, 8);
        assert_eq!(config.bitrate(None), Some(322481));
    }

    #[test]
    fn test_configuration_missing_rate_or_mode() {
        let config = SbcConfiguration::decode(&[0xff, 0x15, 0x02, 0x35], None).unwrap();
        assert_eq!(config.bitrate_params(None), None);
        assert_eq!(config.bitrate(Some(53)), None);

        let config = SbcConfiguration::decode(&[0x21, 0x15, 0x02, 0x00], None).unwrap();
        assert_eq!(config.effective_bitpool(), 0);
        assert_eq!(config.bitrate(None), None);
    }
}
