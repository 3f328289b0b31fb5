#![allow(dead_code)]

use axum_test::TestServer;
use memlink::api::middleware::rate_limit::RateLimitSettings;
use memlink::prelude::*;
use memlink::routes::router;
use memlink::utils::code_generator::{CodeGenerator, SequentialGenerator};
use std::sync::Arc;

pub const BASE_URL: &str = "https://sho.rt";

/// State plus the handles tests need to inspect or steer it.
pub struct TestContext {
    pub state: AppState,
    pub store: Arc<MemoryEntryStore>,
    pub clock: Arc<ManualClock>,
}

pub fn create_test_context() -> TestContext {
    create_test_context_with(ShortenSettings::new(BASE_URL))
}

pub fn create_test_context_with(settings: ShortenSettings) -> TestContext {
    let clock = Arc::new(ManualClock::default());
    let store = Arc::new(MemoryEntryStore::with_clock(clock.clone()));
    let generator: Arc<dyn CodeGenerator> = Arc::new(SequentialGenerator::new());

    let state = AppState::new(
        store.clone() as Arc<dyn EntryStore>,
        generator,
        clock.clone() as Arc<dyn Clock>,
        settings,
    );

    TestContext {
        state,
        store,
        clock,
    }
}

/// Full router with every middleware, generous enough not to throttle tests.
pub fn create_full_server(ctx: &TestContext) -> TestServer {
    create_full_server_with_limit(
        ctx,
        RateLimitSettings {
            per_second: 1,
            burst: 1000,
        },
    )
}

pub fn create_full_server_with_limit(ctx: &TestContext, limit: RateLimitSettings) -> TestServer {
    let app = router(ctx.state.clone(), limit).unwrap();
    TestServer::new(app).unwrap()
}
