//! Reservation Client Demo
//!
//! Drives the feature stores against a running backend:
//! - restores a persisted session (or signs in with the configured
//!   credentials)
//! - lists the first page of concerts for the authenticated user
//! - shows the admin dashboard statistics when signed in as an admin
//!
//! # Usage
//!
//! ```bash
//! # Point at the backend and account to use
//! export ENCORE_API_URL=http://localhost:3000/api/v1
//! export ENCORE_EMAIL=fan@example.com
//! export ENCORE_PASSWORD=secret
//!
//! cargo run --bin demo
//! ```

use encore_api::{ApiClient, ApiError};
use encore_client::concerts::{
    ConcertsAction, ConcertsStore, ListScope, ProductionConcertsEnvironment,
};
use encore_client::config::ClientConfig;
use encore_client::dashboard::{DashboardAction, DashboardStore, ProductionDashboardEnvironment};
use encore_client::session::{
    FileSessionStorage, ProductionSessionEnvironment, SessionAction, SessionContext, SessionStore,
};
use encore_api::types::Role;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SETTLE: Duration = Duration::from_secs(15);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Environment variables may come from a local .env file.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,encore_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url = std::env::var("ENCORE_API_URL")
        .unwrap_or_else(|_| "http://localhost:3000/api/v1".to_string());
    let session_file = std::env::var("ENCORE_SESSION_FILE")
        .unwrap_or_else(|_| ".encore-session.json".to_string());

    let config = ClientConfig::new(base_url);
    let api = Arc::new(ApiClient::new(config.api_config()));
    let context = SessionContext::new();

    println!("\n🎫 Encore reservation client demo");
    println!("   backend: {}\n", config.base_url);

    // ── Session ────────────────────────────────────────────────────────
    let session = SessionStore::new(ProductionSessionEnvironment::new(
        Arc::clone(&api) as _,
        Arc::new(FileSessionStorage::new(session_file)),
        context.clone(),
        config.clone(),
    ));

    println!("1️⃣  Restoring persisted session...");
    let mut handle = session.send(SessionAction::Restore).await?;
    let _ = handle.wait_with_timeout(SETTLE).await;

    if !session.state(|s| s.is_authenticated()).await {
        let email = std::env::var("ENCORE_EMAIL")?;
        let password = std::env::var("ENCORE_PASSWORD")?;
        println!("   no session, signing in as {email}...");

        let settled = session
            .send_and_wait_for(
                SessionAction::Login { email, password },
                |a| {
                    matches!(
                        a,
                        SessionAction::SessionEstablished { .. } | SessionAction::AuthFailed { .. }
                    )
                },
                SETTLE,
            )
            .await?;

        if let SessionAction::AuthFailed { message } = settled {
            return Err(ApiError::Api {
                status: 401,
                message,
            }
            .into());
        }
        // Let the settled action commit before reading state.
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    let state = session.snapshot().await;
    let role = state.role;
    println!(
        "✓ signed in as {} ({})\n",
        state.user.as_ref().map_or("<unknown>", |u| u.name.as_str()),
        role.as_str()
    );

    // ── Concerts ───────────────────────────────────────────────────────
    let scope = if role == Role::Admin {
        ListScope::Admin
    } else {
        ListScope::User
    };
    let concerts = ConcertsStore::new(
        ProductionConcertsEnvironment::new(Arc::clone(&api) as _, context.clone(), config.clone()),
        scope,
    );

    println!("2️⃣  Fetching page 1 of concerts...");
    let mut handle = concerts.send(ConcertsAction::Load { page: 1 }).await?;
    let _ = handle.wait_with_timeout(SETTLE).await;

    let state = concerts.snapshot().await;
    println!(
        "✓ page {}/{} ({} concerts total)",
        state.page.page(),
        state.page.pages(),
        state.page.total()
    );
    for concert in &state.concerts {
        let status = match (&concert.reservation_id, concert.reservation_status) {
            (Some(_), _) => "reserved",
            (None, Some(_)) => "cancelled",
            (None, None) => "available",
        };
        println!("   - {} [{status}]", concert.name);
    }
    println!();

    // ── Dashboard (admin only) ─────────────────────────────────────────
    if role == Role::Admin {
        let dashboard = DashboardStore::new(ProductionDashboardEnvironment::new(
            Arc::clone(&api) as _,
            context,
            config,
        ));

        println!("3️⃣  Fetching dashboard statistics...");
        let mut handle = dashboard.send(DashboardAction::Load).await?;
        let _ = handle.wait_with_timeout(SETTLE).await;

        let stats = dashboard.state(|s| s.stats).await;
        println!(
            "✓ seats: {}  reserved: {}  cancelled: {}",
            stats.total_seats, stats.reserved_count, stats.cancelled_count
        );
    }

    println!("\nDone.");
    Ok(())
}
