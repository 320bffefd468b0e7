//! Sales monitor: prints every sales event that arrives on the analytics queue.

pub mod broker;
pub mod config;
pub mod error;
pub mod handler;
pub mod retry;

pub use config::Config;
pub use error::{MonitorError, Result};
pub use handler::{on_message, parse_sales_event, SalesEvent};
pub use retry::{retry_with_fixed_delay, RetryPolicy};
