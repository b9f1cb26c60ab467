//! Async client for the `pedidos` (orders) REST resource.
//!
//! ```no_run
//! use pedidos_client::{ClientConfig, OrderId, OrdersClient};
//!
//! # async fn run() -> pedidos_client::Result<()> {
//! let client = OrdersClient::new(&ClientConfig::from_env())?;
//! let order = client.get(&OrderId::from(42u64)).await?;
//! println!("{}", order);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};
pub use config::ClientConfig;

pub use core::{orders::OrdersClient, request::RequestExecutor};
pub use domain::model::{Order, OrderId, RequestOptions};
pub use domain::ports::OrdersApi;
pub use utils::error::{ClientError, Result};
