//! Output writers for ranked results.
//!
//! - [`write_text`] / [`to_text`] - human-readable report
//! - [`write_json`] / [`to_json`] - pretty JSON of the whole ranked result
//! - [`write_csv`] / [`to_csv`] - one row per ranked entry - requires `csv-output` feature
//!
//! Every writer honours a [`ReportConfig`](crate::config::ReportConfig):
//! only its categories are emitted, each list cut to its `top`.
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::{AnalysisConfig, ReportConfig};
//! use chatstat::core::{analyze_str, to_json, to_text};
//!
//! let ranked = analyze_str(
//!     r#"{"participants": [{"name": "A"}], "messages": [
//!         {"sender_name": "A", "timestamp_ms": 0, "content": "rust rust go"}
//!     ]}"#,
//!     &AnalysisConfig::default(),
//! )?;
//!
//! let config = ReportConfig::new().with_top(1);
//! assert!(to_text(&ranked, &config).contains("rust"));
//! assert!(!to_json(&ranked, &config)?.contains("\"go\""));
//! # Ok::<(), chatstat::ChatstatError>(())
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
mod json_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
pub use json_writer::{to_json, write_json};
pub use text_writer::{to_text, write_text};
