//! StemSage Core — configuration and error types shared by the stemmer crates.

pub mod config;
pub mod error;

pub use config::{RuleVariant, StemmerConfig};
pub use error::{Error, Result};
