//! Recursive disk-usage walker for canopy.
//!
//! This crate measures how many bytes a file or directory tree uses by
//! walking it depth-first and summing sizes: a path's total is its own
//! size plus the totals of everything below it.
//!
//! # Example
//!
//! ```rust,no_run
//! use canopy_walk::{DiskUsage, WalkConfig};
//!
//! let config = WalkConfig::new("/path/to/measure");
//! let report = DiskUsage::new().measure(&config).unwrap();
//!
//! println!("Total: {} bytes", report.total);
//! for entry in &report.entries {
//!     println!("{:>10}  {}", entry.bytes, entry.path.display());
//! }
//! ```
//!
//! The filesystem is reached through the [`FileSystem`] trait, so tests
//! and callers can substitute an in-memory implementation for
//! [`OsFileSystem`].

mod config;
mod error;
mod fs;
mod usage;

pub use config::{WalkConfig, WalkConfigBuilder};
pub use error::{WalkError, WalkWarning, WarningKind};
pub use fs::{FileSystem, OsFileSystem};
pub use usage::{DiskUsage, UsageEntry, UsageReport};
