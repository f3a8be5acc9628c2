use axum::extract::FromRef;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use std::time::Duration;

/// Shared state handed to axum handlers. `FromRef` lets handlers extract
/// `State<Pool<Postgres>>` directly instead of the whole struct.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub pool: Pool<Postgres>,
}

static POOL: OnceLock<Pool<Postgres>> = OnceLock::new();
static MIGRATIONS_APPLIED: AtomicBool = AtomicBool::new(false);

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Build a connection pool from `DATABASE_URL`.
///
/// Connections open lazily on first use, so this can run outside any
/// particular tokio runtime (each `#[tokio::test]` brings its own).
pub fn create_pool() -> Pool<Postgres> {
    let _ = dotenvy::dotenv();

    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_CONNECTIONS);

    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(&url)
        .expect("Failed to create database pool")
}

/// Apply the embedded migrations to the given pool.
pub async fn run_migrations(pool: &Pool<Postgres>) {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .expect("Failed to run database migrations");
}

/// Process-wide pool for Dioxus server functions, which share one long-lived
/// runtime. REST handlers take `State<Pool<Postgres>>` from `AppState`
/// instead. Migrations run at most once per process; the `swap` guarantees a
/// single runner and the migrations themselves are idempotent anyway.
pub async fn get_db() -> &'static Pool<Postgres> {
    let pool = POOL.get_or_init(create_pool);

    if !MIGRATIONS_APPLIED.swap(true, Ordering::SeqCst) {
        run_migrations(pool).await;
    }

    pool
}
