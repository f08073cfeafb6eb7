mod greet;
mod health_check;
mod metrics;

pub use greet::*;
pub use health_check::*;
pub use metrics::*;
