#![allow(dead_code)]

use axum_test::TestServer;
use clicklink::infrastructure::persistence::{InMemoryLinkRepository, PgLinkRepository};
use clicklink::routes::build_router;
use clicklink::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_BASE_URL: &str = "http://s.test";

pub fn create_memory_state() -> AppState {
    AppState::new(Arc::new(InMemoryLinkRepository::new()), TEST_BASE_URL)
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(PgLinkRepository::new(Arc::new(pool))), TEST_BASE_URL)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(build_router(state, Duration::from_secs(10))).unwrap()
}

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, original_url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn get_click_count(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT click_count FROM links WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}
