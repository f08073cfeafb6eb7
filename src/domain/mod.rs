mod greeting_store;
mod greeting_update;
mod responses;

pub use greeting_store::{GreetingStore, DEFAULT_GREETING};
pub use greeting_update::{GreetingUpdate, UpdateGreetingError};
pub use responses::{ErrorResponse, GreetingResponse};
