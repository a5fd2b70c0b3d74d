//! Converts a model runner registry's `/models` listing into the Ollama
//! `/api/tags` shape, so clients written for one can read the other.
//!
//! ```no_run
//! use std::time::Duration;
//! use modelbridge::convert::Converter;
//! use modelbridge::output::{self, OutputSink};
//!
//! let converter = Converter::new(Duration::from_secs(30))?;
//! let collection = converter.convert_url("http://localhost:12434/models")?;
//! output::write(&collection, &OutputSink::Stdout)?;
//! # Ok::<(), modelbridge::BridgeError>(())
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod display;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod output;

pub use error::{BridgeError, Result};
