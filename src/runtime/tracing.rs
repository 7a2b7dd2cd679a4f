/// Initializes the tracing/logging infrastructure for the service.
///
/// Structured logging covers the store actor (every create, update, and
/// deferred apply), the avatar worker (job launches, drops, drains), and
/// the client layer (request spans via `#[instrument]`).
///
/// # Environment Variables
///
/// Set `RUST_LOG` to control verbosity:
/// - `RUST_LOG=info` - lifecycle events and committed mutations
/// - `RUST_LOG=debug` - full request payloads and per-job detail
/// - `RUST_LOG=profile_service=debug` - debug only for this crate
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
