//! Structured logging bootstrap
//!
//! The library crates only emit `tracing` events: per-chunk `trace` events in
//! the reduction engine, `debug` events per reduction and per solve, and
//! `warn` events when a solve, batch entry or external call fails. This
//! module installs a `tracing-subscriber` to print them. It is compiled in
//! with the `tracing` feature; without it [`init_tracing`] does nothing.
//!
//! # Example
//!
//! ```ignore
//! use tensolve_exec::tracing_support::{init_tracing, TracingConfig, TracingFormat};
//!
//! init_tracing(TracingConfig {
//!     format: TracingFormat::Compact,
//!     filter: "tensolve_exec=debug,warn".to_string(),
//!     ..TracingConfig::default()
//! })?;
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directive (e.g., `RUST_LOG=tensolve_kernels=debug`)
//! - `TENSOLVE_LOG_FORMAT`: `pretty` (default), `json` or `compact`

use anyhow::Result;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable selecting the output format
pub const ENV_LOG_FORMAT: &str = "TENSOLVE_LOG_FORMAT";

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "tensolve_exec=info,tensolve_kernels=info,warn";

/// Tracing output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingFormat {
    /// Pretty-printed human-readable format
    Pretty,
    /// JSON format for structured logging
    Json,
    /// Compact format (single line per event)
    Compact,
}

impl TracingFormat {
    /// Parse from string, falling back to [`TracingFormat::Pretty`]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => TracingFormat::Json,
            "compact" => TracingFormat::Compact,
            _ => TracingFormat::Pretty,
        }
    }
}

/// Tracing configuration
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Output format
    pub format: TracingFormat,
    /// Filter directive (e.g., "tensolve_exec=debug,info")
    pub filter: String,
    /// Enable ANSI colors
    pub with_ansi: bool,
    /// Show target module paths
    pub with_target: bool,
    /// Show thread IDs (useful for the concurrent reduction and batch paths)
    pub with_thread_ids: bool,
    /// Show file locations
    pub with_file: bool,
    /// Show line numbers
    pub with_line_number: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        let format = std::env::var(ENV_LOG_FORMAT)
            .map(|s| TracingFormat::parse(&s))
            .unwrap_or(TracingFormat::Pretty);

        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());

        Self {
            format,
            filter,
            with_ansi: true,
            with_target: true,
            with_thread_ids: false,
            with_file: false,
            with_line_number: false,
        }
    }
}

/// Install a global subscriber for the given configuration
///
/// Call once at application startup.
///
/// # Errors
///
/// Fails if the filter directive is invalid or a global subscriber is
/// already installed.
#[cfg(feature = "tracing")]
pub fn init_tracing(config: TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)?;

    // Format::{pretty, json, compact} keep the display flags set here
    let base = fmt::layer()
        .with_ansi(config.with_ansi && config.format != TracingFormat::Json)
        .with_target(config.with_target)
        .with_thread_ids(config.with_thread_ids)
        .with_file(config.with_file)
        .with_line_number(config.with_line_number);

    let fmt_layer = match config.format {
        TracingFormat::Pretty => base.pretty().boxed(),
        TracingFormat::Json => base.json().boxed(),
        TracingFormat::Compact => base.compact().boxed(),
    };

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .try_init()?;

    Ok(())
}

/// Stub for when the tracing feature is disabled
#[cfg(not(feature = "tracing"))]
pub fn init_tracing(_config: TracingConfig) -> Result<()> {
    Ok(())
}
