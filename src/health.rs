use serde::{Deserialize, Serialize};

use crate::domain::GreetingStore;

const CHECK_NAME: &str = "greeting";
const HEALTHY_GREETING: &str = "Hello";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthData {
    pub greeting: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub name: String,
    pub healthy: bool,
    pub data: HealthData,
}

//healthy iff the greeting is exactly "Hello"
#[derive(Clone, Debug)]
pub struct GreetingHealthCheck {
    store: GreetingStore,
}

impl GreetingHealthCheck {
    pub fn new(store: GreetingStore) -> Self {
        Self { store }
    }

    pub fn check(&self) -> HealthReport {
        let greeting = self.store.read();
        HealthReport {
            name: CHECK_NAME.into(),
            healthy: &*greeting == HEALTHY_GREETING,
            data: HealthData {
                greeting: greeting.to_string(),
            },
        }
    }
}
