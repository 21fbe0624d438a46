//! Sitedata - Excel workbook to JSON data builder
//!
//! This library turns the site's content workbook into the JSON documents the
//! website build consumes: one document per recognized sheet (Site, Artists,
//! Music, Novels, News, Stamps).
//!
//! The per-sheet transforms are pure functions over a [`workbook::Sheet`],
//! so they run against any cell grid:
//!
//! ```
//! use sitedata::transform;
//! use sitedata::workbook::MemorySheet;
//!
//! let mut sheet = MemorySheet::new();
//! sheet.set('A', 3, "song-1");
//! sheet.set('B', 3, "First Light");
//!
//! let doc = transform::music(&sheet);
//! assert_eq!(doc.sections[0].items.len(), 1);
//! assert_eq!(doc.sections[0].items[0].status, "released");
//! ```

pub mod cli;
pub mod error;
pub mod transform;
pub mod types;
pub mod workbook;

// Re-export commonly used types
pub use error::{SitedataError, SitedataResult};
pub use workbook::Sheet;
