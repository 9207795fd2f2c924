//! Text helpers for display labels

/// Humanize a field key into a display label
///
/// Underscores and hyphens become spaces and the first character is
/// uppercased; the rest of the key is left untouched.
///
/// # Examples
///
/// ```
/// use portal_tables::text::humanize_label;
///
/// assert_eq!(humanize_label("created_at"), "Created at");
/// assert_eq!(humanize_label("isVisible"), "IsVisible");
/// assert_eq!(humanize_label(""), "");
/// ```
pub fn humanize_label(key: &str) -> String {
	let spaced = key.replace(['_', '-'], " ");
	let mut chars = spaced.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
		None => String::new(),
	}
}
