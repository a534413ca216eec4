//! A small blocking Rust client for the BART (Bay Area Rapid Transit) API.
//!
//! Each API command is a method on [`Client`]. Arguments are validated
//! before anything is sent, the XML response is decoded into a
//! [`serde_json::Value`] tree, and the interesting element is returned in a
//! [`Reply`].
//!
//! ## Quick start
//! - Configure the API key via `BART_API_KEY` or a `.bartrc` file
//!   (current directory or home directory), or pass it to [`Client::with_key`].
//! - Call one of the command methods.
//!
//! ```no_run
//! use bartapi::{BartError, Client};
//!
//! fn main() -> Result<(), BartError> {
//!     let client = Client::from_env()?;
//!     let etd = client.estimated_departures("embr", None, Some("n"))?;
//!     if let Some(note) = &etd.advisory {
//!         eprintln!("BART says: {note}");
//!     }
//!     println!("{}", etd.data);
//!     Ok(())
//! }
//! ```
//!
//! ## Errors and advisories
//! Invalid arguments, HTTP failures and undecodable bodies are returned as
//! [`BartError`]. An error note the API embeds in an otherwise valid
//! response does not fail the call; it is exposed as [`Reply::advisory`].

#![forbid(unsafe_code)]

mod advisory;
mod client;
mod config;
mod endpoint;
mod error;
mod realtime;
mod reply;
mod route;
mod schedule;
mod station;
pub mod stations;
mod util;
pub mod validate;
mod xml;

pub use client::{ApiVersion, Client, ClientConfig};
pub use endpoint::Endpoint;
pub use error::{BartError, Result};
pub use reply::Reply;
pub use schedule::TripQuery;
pub use validate::TrainId;
