//! Runtime orchestration and lifecycle management.
//!
//! # Main Components
//!
//! - [`ProfileSystem`] - starts, wires, and shuts down the store actor and
//!   the avatar worker
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure
//!
//! # Graceful Shutdown
//!
//! Shutdown rides on channel closure:
//!
//! 1. Dropping the client closes the store request channel and the avatar
//!    job queue.
//! 2. The worker drains its in-flight jobs; its own store handle keeps the
//!    store alive until the last deferred write lands.
//! 3. The store detects closure, logs its final size, and exits.
//!
//! No message accepted before the drop is lost.

pub mod system;
pub mod tracing;

pub use self::system::*;
pub use self::tracing::*;
