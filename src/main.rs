//! Demo binary walking one profile through the service.
//!
//! The flow mirrors how a boundary layer would use the crate:
//! 1. Create a profile (avatar applies immediately on create).
//! 2. Trip the duplicate-email conflict.
//! 3. Update name and avatar together: the name lands synchronously, the
//!    avatar goes through the deferred queue and shows up ~200ms later.
//!
//! Run with `RUST_LOG=info cargo run` (or `debug` for full payloads).

use std::time::Duration;

use profile_service::model::{ProfileCreate, ProfileUpdate};
use profile_service::runtime::{setup_tracing, ProfileSystem};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting profile service demo");

    let system = ProfileSystem::new();

    // Create a profile
    let input = ProfileCreate {
        full_name: "Alice Example".to_string(),
        email: "alice@example.com".to_string(),
        phone: Some("+123456789".to_string()),
        avatar_url: None,
    };

    let span = tracing::info_span!("profile_creation");
    let profile = async {
        info!("Creating profile");
        system
            .client
            .create_profile(input)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(id = %profile.id, "Profile created successfully");

    // A second create with the same email must be rejected
    let duplicate = ProfileCreate {
        full_name: "Alice Again".to_string(),
        email: "alice@example.com".to_string(),
        phone: None,
        avatar_url: None,
    };
    match system.client.create_profile(duplicate).await {
        Ok(p) => warn!(id = %p.id, "Duplicate create unexpectedly succeeded"),
        Err(e) => info!(code = e.status_code(), error = %e, "Duplicate create rejected"),
    }

    // Update name and avatar together; only the name applies synchronously
    let update = ProfileUpdate {
        full_name: Some("Alice Cooper".to_string()),
        avatar_url: Some("https://cdn.example.com/avatars/alice.png".to_string()),
        ..Default::default()
    };

    let span = tracing::info_span!("profile_update");
    let updated = async {
        info!("Updating profile");
        system
            .client
            .update_profile(profile.id, update)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(
        full_name = %updated.full_name,
        avatar = ?updated.avatar_url,
        "Update committed, avatar still pending"
    );

    // Give the deferred mutation time to land, then read it back
    tokio::time::sleep(Duration::from_millis(400)).await;

    let current = system
        .client
        .get_profile(profile.id)
        .await
        .map_err(|e| e.to_string())?;
    info!(avatar = ?current.avatar_url, "Avatar applied in the background");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
