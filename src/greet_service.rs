use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{GreetingResponse, GreetingStore, GreetingUpdate};

const DEFAULT_SUBJECT: &str = "World";

#[derive(Debug)]
pub struct GreetingService {
    store: GreetingStore,
    default_message_counter: AtomicU64,
}

impl GreetingService {
    pub fn new(store: GreetingStore) -> Self {
        Self {
            store,
            default_message_counter: AtomicU64::new(0),
        }
    }

    pub fn get_default(&self) -> GreetingResponse {
        self.default_message_counter.fetch_add(1, Ordering::Relaxed);
        self.compose(DEFAULT_SUBJECT)
    }

    pub fn get_named(&self, name: &str) -> GreetingResponse {
        self.compose(name)
    }

    pub fn update_greeting(&self, update: GreetingUpdate) {
        tracing::info!("greeting changed to {:?}", update.as_ref());
        self.store.update(update.into_inner());
    }

    pub fn default_message_count(&self) -> u64 {
        self.default_message_counter.load(Ordering::Relaxed)
    }

    fn compose(&self, name: &str) -> GreetingResponse {
        let response = GreetingResponse::compose(&self.store.read(), name);
        tracing::info!("greeting from config: {}", response.message);
        response
    }
}
