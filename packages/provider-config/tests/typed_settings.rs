//! Typed settings tests: defaults, round-trips and boundary values

use std::time::Duration;

use quyc_provider_config::prelude::*;

#[cfg(test)]
mod typed_settings_tests {
    use super::*;

    #[test]
    fn untouched_fields_have_documented_defaults() {
        let config = ProviderConfig::default();

        assert!(!config.use_dead_lock_checker());
        assert!(config.boss_executor_service().is_none());
        assert_eq!(config.http_client_codec_max_initial_line_length(), 4096);
        assert_eq!(config.http_client_codec_max_header_size(), 8192);
        assert_eq!(config.http_client_codec_max_chunk_size(), 8192);
        assert!(config.socket_channel_factory().is_none());
        assert!(!config.disable_zero_copy());
        assert!(config.timer().is_none());
        assert_eq!(config.handshake_timeout_in_millis(), 10_000);
        assert_eq!(config.handshake_timeout(), Some(Duration::from_secs(10)));
        assert!(config.channel_pool().is_none());
        assert_eq!(config.chunked_file_chunk_size(), 8192);
        assert_eq!(config.properties_len(), 0);
    }

    #[test]
    fn boolean_fields_round_trip() {
        let mut config = ProviderConfig::new();

        config.set_use_dead_lock_checker(true);
        config.set_disable_zero_copy(true);
        assert!(config.use_dead_lock_checker());
        assert!(config.disable_zero_copy());

        config.set_use_dead_lock_checker(false);
        config.set_disable_zero_copy(false);
        assert!(!config.use_dead_lock_checker());
        assert!(!config.disable_zero_copy());
    }

    #[test]
    fn size_fields_accept_boundary_values_unchanged() {
        let mut config = ProviderConfig::new();

        for value in [0, -1, i32::MIN, i32::MAX, 1] {
            config.set_http_client_codec_max_initial_line_length(value);
            config.set_http_client_codec_max_header_size(value);
            config.set_http_client_codec_max_chunk_size(value);
            config.set_chunked_file_chunk_size(value);

            assert_eq!(config.http_client_codec_max_initial_line_length(), value);
            assert_eq!(config.http_client_codec_max_header_size(), value);
            assert_eq!(config.http_client_codec_max_chunk_size(), value);
            assert_eq!(config.chunked_file_chunk_size(), value);
        }
    }

    #[test]
    fn handshake_timeout_accepts_zero_and_negative() {
        let mut config = ProviderConfig::new();

        config.set_handshake_timeout_in_millis(0);
        assert_eq!(config.handshake_timeout_in_millis(), 0);
        assert_eq!(config.handshake_timeout(), Some(Duration::ZERO));

        config.set_handshake_timeout_in_millis(-250);
        assert_eq!(config.handshake_timeout_in_millis(), -250);
        assert_eq!(config.handshake_timeout(), None);

        config.set_handshake_timeout_in_millis(i64::MAX);
        assert_eq!(config.handshake_timeout_in_millis(), i64::MAX);
    }

    #[test]
    fn fluent_builders_set_fields() {
        let config = ProviderConfig::new()
            .with_dead_lock_checker(true)
            .with_codec_limits(1, 2, 3)
            .with_zero_copy_disabled(true)
            .with_handshake_timeout_in_millis(42)
            .with_chunked_file_chunk_size(-8);

        assert!(config.use_dead_lock_checker());
        assert_eq!(config.http_client_codec_max_initial_line_length(), 1);
        assert_eq!(config.http_client_codec_max_header_size(), 2);
        assert_eq!(config.http_client_codec_max_chunk_size(), 3);
        assert!(config.disable_zero_copy());
        assert_eq!(config.handshake_timeout_in_millis(), 42);
        assert_eq!(config.chunked_file_chunk_size(), -8);

        let single = ProviderConfig::new()
            .with_http_client_codec_max_initial_line_length(10)
            .with_http_client_codec_max_header_size(20)
            .with_http_client_codec_max_chunk_size(30);
        assert_eq!(
            single.settings(),
            TransportSettings {
                http_client_codec_max_initial_line_length: 10,
                http_client_codec_max_header_size: 20,
                http_client_codec_max_chunk_size: 30,
                ..TransportSettings::default()
            }
        );
    }

    #[test]
    fn settings_snapshot_applies_back() {
        let source = ProviderConfig::new()
            .with_handshake_timeout_in_millis(1234)
            .with_zero_copy_disabled(true);

        let mut target = ProviderConfig::new();
        target.apply_settings(&source.settings());
        assert_eq!(target.handshake_timeout_in_millis(), 1234);
        assert!(target.disable_zero_copy());
    }

    #[test]
    fn settings_serialize_with_camel_case_names() {
        let json = serde_json::to_value(ProviderConfig::new().settings()).unwrap();

        assert_eq!(json["httpClientCodecMaxInitialLineLength"], 4096);
        assert_eq!(json["handshakeTimeoutInMillis"], 10_000);
        assert_eq!(json["useDeadLockChecker"], false);
    }
}
