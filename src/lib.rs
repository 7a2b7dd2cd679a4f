//! # Profile Service
//!
//! > **An in-memory user-profile service built on message-passing actors.**
//!
//! This crate manages user contact profiles: create, fetch, and partially
//! update records with validated fields, unique emails, and avatar changes
//! that land asynchronously after a processing delay.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Single Writer Instead of Locks
//!
//! All records live inside one store actor that processes requests
//! sequentially from a channel. There is no shared map and no `Mutex`:
//! the email uniqueness scan and the insert it guards always run
//! back-to-back inside the actor, so two concurrent creates with the same
//! email can never both pass the check. One wins, the other gets a
//! conflict.
//!
//! ### Deferred Mutations as an Explicit Queue
//!
//! Avatar changes are not applied synchronously. An update that carries
//! `avatar_url` commits everything else, responds with the old avatar, and
//! enqueues a job. The avatar worker consumes the queue, sleeps each job
//! for a fixed delay, and writes the avatar back through the same store
//! channel every other mutation uses. Job failures are logged and
//! swallowed; no request ever fails because a deferred write did.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Every operation returns `Result<_, ProfileError>`. Variants map onto the
//! boundary taxonomy (`404` not found, `400` email conflict, `422`
//! validation), and [`store::ErrorBody`] renders any of them as the
//! `{detail, code}` wire shape.
//!
//! ### 2. Validation Before the Store
//! [`ProfileClient`](clients::ProfileClient) runs every payload through the
//! field validator before sending it. The store only ever sees well-formed
//! data, and an invalid request never costs a channel round-trip.
//!
//! ### 3. Concurrency Model
//! Two long-lived tasks: the store actor and the avatar worker. Deferred
//! jobs each get their own short-lived task so their delays overlap instead
//! of queueing; for one profile, whichever write lands last wins.
//!
//! ### 4. Observability
//! `tracing` everywhere with structured fields: the store logs every
//! mutation with id and store size, the worker logs job launches and
//! drops, and client methods carry `#[instrument]` spans. See
//! [`runtime::setup_tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - the data: [`Profile`](model::Profile) and its payload DTOs
//! - [`validation`] - per-field rules shared by create and update
//! - [`store`] - the single-writer actor, its client, messages, and errors
//! - [`avatar`] - the deferred-mutation queue and worker
//! - [`clients`] - [`ProfileClient`](clients::ProfileClient), the validated API
//! - [`runtime`] - system wiring, graceful shutdown, tracing setup
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use profile_service::model::{ProfileCreate, ProfileUpdate};
//! use profile_service::runtime::ProfileSystem;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = ProfileSystem::new();
//!
//!     let profile = system
//!         .client
//!         .create_profile(ProfileCreate {
//!             full_name: "Alice Example".to_string(),
//!             email: "alice@example.com".to_string(),
//!             phone: Some("+123456789".to_string()),
//!             avatar_url: None,
//!         })
//!         .await?;
//!
//!     let updated = system
//!         .client
//!         .update_profile(
//!             profile.id,
//!             ProfileUpdate {
//!                 full_name: Some("Alice Cooper".to_string()),
//!                 ..Default::default()
//!             },
//!         )
//!         .await?;
//!     assert_eq!(updated.full_name, "Alice Cooper");
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod avatar;
pub mod clients;
pub mod model;
pub mod runtime;
pub mod store;
pub mod validation;
