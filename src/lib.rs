//! Helldivers 2 API client
//!
//! Typed async access to the community Helldivers 2 API (`api.helldivers2.dev`)
//! and the Diveharder API (`api.diveharder.com`), plus the pieces of the
//! `diveharder` command line tool built on top of it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use diveharder::{ApiClient, AppError, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = ApiClient::from_config(&config)?;
//!
//!     if let Some(dispatch) = client.dispatches().get_latest_dispatch().await? {
//!         println!("{}: {}", dispatch.published, dispatch.as_plaintext());
//!     }
//!
//!     for campaign in client.campaigns().get_campaigns().await? {
//!         println!(
//!             "{} {:.2}%",
//!             campaign.planet.name,
//!             campaign.liberation_percentage()
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod logging;
pub mod markup;
pub mod models;

// Re-export commonly used types for convenience
pub use api::{ApiClient, ClientSettings, DiveharderRoute};
pub use config::Config;
pub use error::AppError;
pub use models::{Assignment, Campaign, Dispatch, DispatchOrder, Planet, Update};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
