use parking_lot::RwLock;
use std::sync::Arc;

pub const DEFAULT_GREETING: &str = "Ciao";

//every clone sees the same phrase
#[derive(Clone, Debug)]
pub struct GreetingStore {
    //readers clone the Arc and drop the guard straight away, writers swap the whole Arc
    greeting: Arc<RwLock<Arc<str>>>,
}

impl GreetingStore {
    pub fn initialize(configured: Option<String>) -> Self {
        let greeting = configured.unwrap_or_else(|| String::from(DEFAULT_GREETING));
        Self {
            greeting: Arc::new(RwLock::new(Arc::from(greeting))),
        }
    }

    pub fn read(&self) -> Arc<str> {
        Arc::clone(&self.greeting.read())
    }

    //no validation on purpose - an empty greeting is accepted
    pub fn update(&self, new_greeting: String) {
        *self.greeting.write() = Arc::from(new_greeting);
    }
}
