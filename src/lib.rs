//! Single-shot HTTP GET returning either a processed JSON body or a
//! structured error for a non-200 status.
//!
//! ```no_run
//! use fetcher::{Fetcher, Passthrough};
//!
//! # async fn run() -> fetcher::Result<()> {
//! let fetcher = Fetcher::new(None, Passthrough);
//! let outcome = fetcher
//!     .fetch_data(None, "https://jsonplaceholder.typicode.com/todos/1")
//!     .await?;
//! println!("{}", outcome.into_value());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod logging;
pub mod outcome;
pub mod output;
pub mod params;
pub mod processor;

pub use client::Fetcher;
pub use error::{FetcherError, Result};
pub use outcome::FetchOutcome;
pub use params::ExecutionParams;
pub use processor::{Passthrough, Pointer, Processor};
