//! Telemetry metric name constants.
//!
//! Centralised metric names for breedfetch operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `breedfetch_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `provider` — provider name (e.g. "dog.ceo", "static")
//! - `status` — outcome: "ok" or "error"

/// Total lookups dispatched to a remote provider.
///
/// Labels: `provider`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "breedfetch_requests_total";

/// Remote lookup duration in seconds.
///
/// Labels: `provider`.
pub const REQUEST_DURATION_SECONDS: &str = "breedfetch_request_duration_seconds";

/// Total sub-breed cache hits.
///
/// Labels: `provider` (the wrapped provider).
pub const CACHE_HITS_TOTAL: &str = "breedfetch_cache_hits_total";

/// Total sub-breed cache misses.
///
/// Labels: `provider` (the wrapped provider).
pub const CACHE_MISSES_TOTAL: &str = "breedfetch_cache_misses_total";
