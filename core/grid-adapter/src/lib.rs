//! FILENAME: core/grid-adapter/src/lib.rs
//! Tabular grid adapter.
//!
//! Turns heterogeneous, possibly nested records into a row/column grid a
//! declarative data grid can render, and answers the grid's render-time
//! questions: which adjacent cells merge, how wide a column is, which
//! classes a cell carries. No I/O, no rendering, no caching across calls.
//!
//! Layers:
//! - `definition`: Serializable configuration (what the grid IS)
//! - `resolver`: Field path evaluation against one record
//! - `engine`: Records -> matrix + row headers (HOW we flatten)
//! - `view`: Render-ready provider (WHAT we display)
//! - `merge`, `presentation`: Render-time callbacks
//! - `page`: A definition wired to its engines

pub mod logging;

pub mod definition;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod merge;
pub mod page;
pub mod presentation;
pub mod resolver;
pub mod view;

pub use definition::*;
pub use engine::{extract_row_ids, flatten_values, row_headers, RecordFlattener};
pub use error::{GridError, GridResult};
pub use fallback::{DemoHundredsFallback, FallbackProvider, FixedFallback, NullFallback};
pub use field_path::{FieldPath, PathSegment};
pub use merge::{should_merge, MergeComparator, MergeSpan};
pub use page::GridPage;
pub use presentation::{Alignment, PresentationEngine};
pub use resolver::FieldPathResolver;
pub use view::*;
