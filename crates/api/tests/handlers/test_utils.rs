use std::sync::Arc;

use axum_test::TestServer;
use jobfair_api::{ApiState, app};
use jobfair_core::grid::TimeGrid;
use jobfair_db::{
    memory::InMemoryTimeSlotStore,
    store::{MockTimeSlotStore, TimeSlotStore},
};

pub struct TestContext {
    pub server: TestServer,
}

impl TestContext {
    /// Server backed by a fresh in-memory store.
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryTimeSlotStore::new()), "memory")
    }

    /// Server backed by a mock, for failure paths a real store cannot produce.
    pub fn with_mock(mock: MockTimeSlotStore) -> Self {
        Self::with_store(Arc::new(mock), "mock")
    }

    fn with_store(store: Arc<dyn TimeSlotStore>, store_backend: &'static str) -> Self {
        let state = Arc::new(ApiState {
            store,
            store_backend,
            grid: TimeGrid::default(),
        });
        let server = TestServer::new(app(state)).expect("Failed to start test server");
        Self { server }
    }
}
