use crate::model::ContentItem;

/// Token that always splits, regardless of the configured separator.
pub const DEFAULT_SEPARATOR: &str = "<_>";

fn split_on(text: &str, separator: &str, label: &str) -> Vec<ContentItem> {
    text.split(separator)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .enumerate()
        .map(|(i, fragment)| ContentItem::new(fragment, format!("{} {}", label, i + 1)))
        .collect()
}

/// Splits on `<_>`, falling back to `custom_separator`, then to a single item.
pub fn detect_delimited(text: &str, custom_separator: &str) -> Vec<ContentItem> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if text.contains(DEFAULT_SEPARATOR) {
        return split_on(text, DEFAULT_SEPARATOR, "<_> Separated Item");
    }

    if !custom_separator.is_empty() && text.contains(custom_separator) {
        return split_on(text, custom_separator, "Custom Separated Item");
    }

    vec![ContentItem::new(trimmed, "Single Content")]
}
