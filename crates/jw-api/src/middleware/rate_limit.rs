//! Per-IP rate limits for the unauthenticated credential endpoints.
//!
//! Clients are keyed with `SmartIpKeyExtractor`, which reads
//! `X-Forwarded-For`, `X-Real-IP` and `Forwarded` before falling back to the
//! peer address, so the server must be run with connect info.

/// Login attempts refilled per second
pub const LOGIN_RATE_PER_SECOND: u64 = 5;
pub const LOGIN_BURST_SIZE: u32 = 10;

/// Registrations refilled per second; each one uploads an image
pub const REGISTRATION_RATE_PER_SECOND: u64 = 2;
pub const REGISTRATION_BURST_SIZE: u32 = 5;

/// Build a `GovernorLayer` keyed by client IP.
///
/// A macro keeps the layer's generic parameters inferred at the call site.
#[macro_export]
macro_rules! make_rate_limit_layer {
    ($per_second:expr, $burst:expr) => {{
        let governor_conf = ::tower_governor::governor::GovernorConfigBuilder::default()
            .per_second($per_second)
            .burst_size($burst)
            .key_extractor(::tower_governor::key_extractor::SmartIpKeyExtractor)
            .finish()
            .expect("rate limit settings are non-zero");

        ::tower_governor::GovernorLayer::new(governor_conf)
    }};
}
