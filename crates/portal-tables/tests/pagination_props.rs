//! Property tests for the pagination and clamping laws

use portal_tables::column::ColumnDescriptor;
use portal_tables::paginate::{clamp_page, paginate, total_pages};
use portal_tables::record::Record;
use portal_tables::table::TableView;
use proptest::prelude::*;
use serde_json::json;

proptest! {
	#[test]
	fn total_pages_is_ceil_with_a_floor_of_one(count in 0usize..10_000, page_size in 1usize..500) {
		let expected = (count.max(1) + page_size - 1) / page_size;
		prop_assert_eq!(total_pages(count, page_size), expected.max(1));
	}

	#[test]
	fn requested_pages_always_clamp_into_range(
		requested in 0usize..100_000,
		count in 0usize..10_000,
		page_size in 1usize..500,
	) {
		let page = clamp_page(requested, count, page_size);
		prop_assert!(page >= 1);
		prop_assert!(page <= total_pages(count, page_size));
	}

	#[test]
	fn pages_partition_the_collection(count in 0usize..2_000, page_size in 1usize..100) {
		let items: Vec<usize> = (0..count).collect();
		let pages = total_pages(count, page_size);

		let mut reassembled = Vec::new();
		for number in 1..=pages {
			let page = paginate(items.clone(), number, page_size);
			prop_assert!(page.len() <= page_size);
			prop_assert_eq!(page.number, number);
			prop_assert_eq!(page.total_count, count);
			reassembled.extend(page.items);
		}
		prop_assert_eq!(reassembled, items);
	}

	#[test]
	fn displayed_range_matches_the_page_contents(
		count in 1usize..2_000,
		page_size in 1usize..100,
		requested in 1usize..50,
	) {
		let items: Vec<usize> = (0..count).collect();
		let page = paginate(items, requested, page_size);
		prop_assert_eq!(page.start_index(), (page.number - 1) * page_size + 1);
		prop_assert_eq!(page.end_index(), page.start_index() + page.len() - 1);
	}

	#[test]
	fn navigation_in_a_view_never_leaves_the_valid_range(
		count in 0usize..500,
		page_size in 1usize..50,
		requested in 0usize..10_000,
	) {
		let records: Vec<Record> = (0..count)
			.map(|i| Record::from([("id".to_string(), json!(i))]))
			.collect();
		let mut view = TableView::builder()
			.records(records)
			.column(ColumnDescriptor::new("id"))
			.page_size(page_size)
			.build()
			.unwrap();

		view.go_to_page(requested);
		let page = view.visible_rows();
		prop_assert!(page.number >= 1);
		prop_assert!(page.number <= page.total_pages);
		prop_assert_eq!(page.total_pages, total_pages(count, page_size));
	}
}
