//! Page slicing and pagination metadata
//!
//! Page numbers are 1-indexed and always clamped into the valid range; an
//! out-of-range request lands on the nearest real page instead of failing.
//! An empty collection still has one (empty) page so consumers never deal
//! with a zero-page table.

use serde::Serialize;

/// One page of a filtered, sorted record sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
	/// Items on this page
	pub items: Vec<T>,
	/// Current page number (1-indexed, clamped)
	pub number: usize,
	/// Total number of pages (at least 1)
	pub total_pages: usize,
	/// Total number of items across all pages
	pub total_count: usize,
	/// Items per page
	pub page_size: usize,
}

impl<T> Page<T> {
	/// Returns the 1-based index of the first item on this page, 0 when empty
	///
	/// # Examples
	///
	/// ```
	/// use portal_tables::paginate::paginate;
	///
	/// let page = paginate((1..=25).collect::<Vec<i32>>(), 2, 10);
	/// assert_eq!(page.start_index(), 11);
	/// assert_eq!(page.end_index(), 20);
	/// ```
	pub fn start_index(&self) -> usize {
		if self.items.is_empty() {
			0
		} else {
			(self.number - 1) * self.page_size + 1
		}
	}

	/// Returns the 1-based index of the last item on this page, 0 when empty
	pub fn end_index(&self) -> usize {
		if self.items.is_empty() {
			0
		} else {
			self.start_index() + self.items.len() - 1
		}
	}

	/// Returns true if a later page exists
	pub fn has_next(&self) -> bool {
		self.number < self.total_pages
	}

	/// Returns true if an earlier page exists
	pub fn has_previous(&self) -> bool {
		self.number > 1
	}

	/// Returns true if any page other than this one exists
	pub fn has_other_pages(&self) -> bool {
		self.has_previous() || self.has_next()
	}

	/// Returns the number of items on this page
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if this page holds no items
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Returns an iterator over all page numbers
	pub fn page_range(&self) -> std::ops::RangeInclusive<usize> {
		1..=self.total_pages
	}

	/// Returns the page numbers for a pagination widget, eliding long runs
	///
	/// `None` entries stand for an ellipsis. `on_each_side` pages are kept
	/// around the current page and `on_ends` at each extreme; short ranges
	/// are returned whole.
	///
	/// # Examples
	///
	/// ```
	/// use portal_tables::paginate::paginate;
	///
	/// let page = paginate((1..=200).collect::<Vec<i32>>(), 10, 10);
	/// let elided = page.elided_page_range(2, 1);
	/// assert_eq!(elided.first(), Some(&Some(1)));
	/// assert!(elided.contains(&None));
	/// assert!(elided.contains(&Some(10)));
	/// assert_eq!(elided.last(), Some(&Some(20)));
	/// ```
	pub fn elided_page_range(&self, on_each_side: usize, on_ends: usize) -> Vec<Option<usize>> {
		if self.total_pages <= on_each_side * 2 + on_ends * 2 + 1 {
			return self.page_range().map(Some).collect();
		}

		let window_start = self.number.saturating_sub(on_each_side).max(1);
		let window_end = (self.number + on_each_side).min(self.total_pages);

		let mut range = Vec::new();
		for n in 1..=on_ends.min(self.total_pages) {
			if n < window_start {
				range.push(Some(n));
			}
		}
		if window_start > on_ends + 1 {
			range.push(None);
		}
		range.extend((window_start..=window_end).map(Some));
		if window_end < self.total_pages - on_ends {
			range.push(None);
		}
		for n in (self.total_pages - on_ends + 1)..=self.total_pages {
			if n > window_end {
				range.push(Some(n));
			}
		}
		range
	}
}

/// Computes the total page count for a collection size
///
/// Always at least 1, even for an empty collection.
pub fn total_pages(count: usize, page_size: usize) -> usize {
	count.div_ceil(page_size).max(1)
}

/// Clamps a requested page number into `[1, total_pages]`
pub fn clamp_page(requested: usize, count: usize, page_size: usize) -> usize {
	requested.clamp(1, total_pages(count, page_size))
}

/// Slices one page out of an already filtered and sorted sequence
///
/// The requested page number is clamped, never rejected.
///
/// # Examples
///
/// ```
/// use portal_tables::paginate::paginate;
///
/// let page = paginate((1..=25).collect::<Vec<i32>>(), 999, 10);
/// assert_eq!(page.number, 3);
/// assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
/// assert_eq!(page.total_pages, 3);
/// ```
pub fn paginate<T>(items: Vec<T>, requested_page: usize, page_size: usize) -> Page<T> {
	let total_count = items.len();
	let total_pages = total_pages(total_count, page_size);
	let number = clamp_page(requested_page, total_count, page_size);

	let start = (number - 1) * page_size;
	let items: Vec<T> = items
		.into_iter()
		.skip(start)
		.take(page_size)
		.collect();

	Page {
		items,
		number,
		total_pages,
		total_count,
		page_size,
	}
}
