//! Reporting export.
//!
//! CSV rendering of the derived statements. PDF rendering is delegated
//! to an external HTML-to-PDF collaborator and is not part of this crate;
//! the exporter only guarantees well-formed statement data.

pub mod csv;

pub use csv::{CsvExporter, ExportError};
