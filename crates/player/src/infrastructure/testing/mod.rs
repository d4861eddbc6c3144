//! Hand-written fakes and JSON fixtures shared by unit tests.

mod fakes;
pub mod fixtures;

use std::sync::Arc;

pub use fakes::{FakeTransport, InstantSleep};

use crate::infrastructure::cache::ResponseCache;
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::platform::MemoryKeyValueStore;
use crate::infrastructure::srd_api::{RetryPolicy, SrdApiClient};
use crate::repositories::RepositoryContext;
use crate::stores::HomebrewStore;

/// A repository context wired to fakes, with handles kept for assertions.
pub struct TestContext {
    pub transport: Arc<FakeTransport>,
    pub sleep: Arc<InstantSleep>,
    pub storage: Arc<MemoryKeyValueStore>,
    pub context: RepositoryContext,
}

impl TestContext {
    pub fn new(transport: FakeTransport) -> Self {
        let transport = Arc::new(transport);
        let sleep = Arc::new(InstantSleep::new());
        let storage = Arc::new(MemoryKeyValueStore::new());

        let api = SrdApiClient::new(
            fixtures::BASE_URL,
            transport.clone(),
            ResponseCache::new(Arc::new(MemoryKeyValueStore::new())),
            sleep.clone(),
            RetryPolicy::default(),
        );
        let homebrew = HomebrewStore::load(storage.clone(), Arc::new(SystemClock::new()))
            .expect("empty homebrew bank loads");

        Self {
            transport,
            sleep,
            storage,
            context: RepositoryContext::new(Arc::new(api), Arc::new(homebrew)),
        }
    }

    pub fn context(&self) -> RepositoryContext {
        self.context.clone()
    }
}
