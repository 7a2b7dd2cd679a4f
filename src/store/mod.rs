//! # Profile Store
//!
//! The single-writer store actor and everything needed to talk to it.
//!
//! ## Overview
//!
//! All profile records live inside [`ProfileStore`], which runs as its own
//! task and processes requests strictly one at a time. That sequencing is
//! the whole concurrency story: the email uniqueness scan and the commit it
//! guards can never be interleaved with another writer, so "scan then
//! insert" is atomic without a single lock.
//!
//! ## Structure
//!
//! - [`actor`] - [`ProfileStore`], the request loop and the state it owns
//! - [`client`] - [`StoreClient`], the cloneable sending half
//! - [`message`] - [`StoreRequest`] and the [`Response`] alias
//! - [`merge`] - pure merge of a partial update into a record
//! - [`error`] - [`ProfileError`] and the wire-level [`ErrorBody`]
//! - [`mock`] - channel-inspection test doubles
//!
//! ## Usage
//!
//! ```rust
//! use profile_service::model::ProfileCreate;
//! use profile_service::store::ProfileStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (store, client) = ProfileStore::new();
//!     tokio::spawn(store.run());
//!
//!     let profile = client
//!         .create(ProfileCreate {
//!             full_name: "Alice Example".to_string(),
//!             email: "alice@example.com".to_string(),
//!             phone: None,
//!             avatar_url: None,
//!         })
//!         .await?;
//!     assert_eq!(profile.id.0, 1);
//!     Ok(())
//! }
//! ```

pub mod actor;
pub mod client;
pub mod error;
pub mod merge;
pub mod message;
pub mod mock;

pub use actor::ProfileStore;
pub use client::StoreClient;
pub use error::{ErrorBody, ProfileError};
pub use merge::UpdateOutcome;
pub use message::{Response, StoreRequest};
