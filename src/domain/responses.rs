use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GreetingResponse {
    pub message: String,
}

impl GreetingResponse {
    pub fn compose(greeting: &str, name: &str) -> Self {
        Self {
            message: format!("{} {}!", greeting, name),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
