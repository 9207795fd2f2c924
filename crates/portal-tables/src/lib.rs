//! Data table views for portal admin pages
//!
//! This crate provides the tabular view engine behind every admin listing
//! page of the portal: one generic component that takes an arbitrary record
//! collection and column/filter descriptors and produces a searched,
//! filtered, sorted, paginated view, independent of the data's origin
//! (library books, store orders, users, notifications).
//!
//! # Features
//!
//! - **Descriptors**: declarative column and filter definitions with builders
//! - **Search**: case-insensitive free-text match over string-typed columns
//! - **Filtering**: conjunctive text/select/boolean filters
//! - **Sorting**: stable, direction-toggling sort with native value ordering
//! - **Pagination**: clamped page navigation with `?page=N` semantics
//! - **List queries**: query-parameter bridge for admin list endpoints
//! - **Export**: CSV and JSON export (requires the `export` feature)
//!
//! The engine is synchronous and purely in-memory: the data-fetch layer
//! hands it a fully-materialized record collection, and the rendering layer
//! re-renders from [`TableView::visible_rows`] after each interaction.
//! After a view is built, no operation fails — malformed input degrades to
//! a safe default (no match, ignored constraint, clamped page).
//!
//! # Example
//!
//! ```rust
//! use portal_tables::column::ColumnDescriptor;
//! use portal_tables::filter::{FilterDescriptor, FilterValue};
//! use portal_tables::table::TableView;
//! use serde_json::json;
//! use std::collections::HashMap;
//!
//! let books = vec![
//!     HashMap::from([
//!         ("title".to_string(), json!("Linear Algebra")),
//!         ("available".to_string(), json!(true)),
//!     ]),
//!     HashMap::from([
//!         ("title".to_string(), json!("Organic Chemistry")),
//!         ("available".to_string(), json!(false)),
//!     ]),
//! ];
//!
//! let mut view = TableView::builder()
//!     .records(books)
//!     .column(ColumnDescriptor::new("title"))
//!     .column(ColumnDescriptor::new("available").sortable(false))
//!     .filter(FilterDescriptor::boolean("available"))
//!     .build()
//!     .unwrap();
//!
//! view.set_filter("available", Some(FilterValue::Bool(true)));
//! view.sort_by("title");
//!
//! let page = view.visible_rows();
//! assert_eq!(page.total_count, 1);
//! assert_eq!(page.items[0]["title"], json!("Linear Algebra"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod error;
#[cfg(feature = "export")]
pub mod export;
pub mod filter;
pub mod paginate;
pub mod predicate;
pub mod query;
pub mod record;
pub mod sort;
pub mod state;
pub mod table;
pub mod text;

// Re-exports for convenience
pub use column::ColumnDescriptor;
pub use error::{TableError, TableResult};
#[cfg(feature = "export")]
pub use export::ExportFormat;
pub use filter::{FilterDescriptor, FilterKind, FilterOption, FilterValue};
pub use paginate::Page;
pub use query::{ListQuery, ListResponse};
pub use record::Record;
pub use sort::{SortConfig, SortOrder};
pub use state::ViewState;
pub use table::TableView;
