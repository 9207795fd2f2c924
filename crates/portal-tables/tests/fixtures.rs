//! Common test fixtures for portal-tables tests

use portal_tables::column::ColumnDescriptor;
use portal_tables::filter::FilterDescriptor;
use portal_tables::record::Record;
use portal_tables::table::TableView;
use rstest::*;
use serde_json::json;

/// Builds one library book record
pub fn book(title: &str, author: &str, category: &str, available: bool, added_at: &str) -> Record {
	Record::from([
		("title".to_string(), json!(title)),
		("author".to_string(), json!(author)),
		("category".to_string(), json!(category)),
		("available".to_string(), json!(available)),
		("added_at".to_string(), json!(added_at)),
	])
}

/// Fixture providing sample library books
#[fixture]
pub fn sample_books() -> Vec<Record> {
	vec![
		book(
			"Linear Algebra",
			"Gilbert Strang",
			"math",
			true,
			"2024-01-15T09:00:00Z",
		),
		book(
			"Organic Chemistry",
			"Paula Bruice",
			"science",
			false,
			"2024-02-20T09:00:00Z",
		),
		book(
			"Calculus Made Easy",
			"Silvanus Thompson",
			"math",
			true,
			"2023-11-05T09:00:00Z",
		),
		book(
			"Intro to Algorithms",
			"Thomas Cormen",
			"cs",
			true,
			"2024-03-10T09:00:00Z",
		),
		book(
			"Modern Physics",
			"Kenneth Krane",
			"science",
			false,
			"2024-01-02T09:00:00Z",
		),
	]
}

/// Fixture providing a book table with columns and filters configured
#[fixture]
pub fn book_view(sample_books: Vec<Record>) -> TableView {
	TableView::builder()
		.records(sample_books)
		.column(ColumnDescriptor::new("title"))
		.column(ColumnDescriptor::new("author"))
		.column(ColumnDescriptor::new("category"))
		.column(ColumnDescriptor::new("available").sortable(false))
		.column(ColumnDescriptor::new("added_at").label("Added"))
		.filter(FilterDescriptor::text("author"))
		.filter(
			FilterDescriptor::select("category")
				.option("math", "Mathematics")
				.option("science", "Science")
				.option("cs", "Computer Science"),
		)
		.filter(FilterDescriptor::boolean("available"))
		.build()
		.expect("book view configuration is valid")
}

/// Fixture providing a large collection for pagination tests
#[fixture]
pub fn many_books() -> Vec<Record> {
	(0..25)
		.map(|i| {
			book(
				&format!("Book {i:02}"),
				"Various",
				"misc",
				true,
				"2024-01-01T00:00:00Z",
			)
		})
		.collect()
}
