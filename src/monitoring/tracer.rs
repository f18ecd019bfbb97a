/*!
 * Structured Tracing
 * Subscriber setup and per-run spans using the tracing crate
 */

use crate::scheduler::SchedulingPolicy;
use std::time::Instant;
use tracing::{debug, info, span, Level, Span};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

/// Initialize structured tracing
///
/// `RUST_LOG` sets the filter (default: info). Output goes to stderr so
/// reports on stdout stay clean.
pub fn init_tracing(json: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
        info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
        debug!("Structured tracing initialized");
    }
}

/// Generate a unique run ID for log correlation
pub fn generate_run_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span covering one policy run
pub struct RunSpan {
    span: Span,
    start: Instant,
    run_id: String,
}

impl RunSpan {
    pub fn new(policy: SchedulingPolicy, process_count: usize) -> Self {
        let run_id = generate_run_id();
        let span = span!(
            Level::INFO,
            "policy_run",
            run_id = %run_id,
            policy = policy.as_str(),
            processes = process_count,
            duration_us = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
            run_id,
        }
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}

impl Drop for RunSpan {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed().as_micros() as u64;
        self.span.record("duration_us", elapsed);
    }
}
