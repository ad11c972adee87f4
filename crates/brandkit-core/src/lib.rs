pub mod config;
pub mod error;
pub mod logging;

pub mod brand;
pub mod checksum;
pub mod download;
pub mod export;
pub mod fetcher;
pub mod naming;
pub mod options;
pub mod quick;
pub mod storage;

pub use error::{BrandkitError, Result};
