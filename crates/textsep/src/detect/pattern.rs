use crate::model::ContentItem;
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)\.\s+(.*)$").unwrap());
static LETTERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([a-zA-Z])\.\s+(.*)$").unwrap());
static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*•]\s+(.*)$").unwrap());
static ROMAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^([ivxlcdm]+)\.\s+(.*)$").unwrap());
static STEP: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^step\s+([0-9]+):?\s+(.*)$").unwrap());

/// Label and first-line body of a line that opens a new item.
fn classify(line: &str) -> Option<(String, String)> {
    if let Some(caps) = NUMBERED.captures(line) {
        return Some((format!("Numbered Item ({})", &caps[1]), caps[2].to_string()));
    }
    if let Some(caps) = LETTERED.captures(line) {
        return Some((format!("Lettered Item ({})", &caps[1]), caps[2].to_string()));
    }
    if let Some(caps) = BULLET.captures(line) {
        return Some(("Bullet Point".to_string(), caps[1].to_string()));
    }
    if let Some(caps) = ROMAN.captures(line) {
        return Some((format!("Roman Numeral ({})", &caps[1]), caps[2].to_string()));
    }
    if let Some(caps) = STEP.captures(line) {
        return Some((format!("Step {}", &caps[1]), caps[2].to_string()));
    }
    None
}

#[derive(Default)]
struct Accumulator {
    current: String,
    kind: String,
    items: Vec<ContentItem>,
}

impl Accumulator {
    fn in_progress(&self) -> bool {
        !self.current.is_empty()
    }

    fn flush(&mut self) {
        if self.in_progress() && !self.kind.is_empty() && !self.current.trim().is_empty() {
            self.items.push(ContentItem::new(&self.current, self.kind.as_str()));
        }
        self.current.clear();
        self.kind.clear();
    }

    fn start(&mut self, kind: String, body: String) {
        self.flush();
        self.current = body;
        self.kind = kind;
    }

    fn continue_with(&mut self, line: &str) {
        if self.in_progress() {
            self.current.push('\n');
            self.current.push_str(line);
        }
    }
}

/// Runs the line-oriented list detector over `text`.
pub fn detect_patterns(text: &str) -> Vec<ContentItem> {
    let mut acc = Accumulator::default();

    for raw in text.split('\n') {
        let line = raw.trim();

        if line.is_empty() {
            acc.flush();
            continue;
        }

        match classify(line) {
            Some((kind, body)) => acc.start(kind, body),
            None => acc.continue_with(line),
        }
    }

    acc.flush();
    acc.items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[ContentItem]) -> Vec<(&str, &str)> {
        items
            .iter()
            .map(|i| (i.content.as_str(), i.kind.as_str()))
            .collect()
    }

    #[test]
    fn numbered_items_split_across_blank_lines() {
        let items = detect_patterns("1. First\n2. Second\n\n3. Third");
        assert_eq!(
            pairs(&items),
            vec![
                ("First", "Numbered Item (1)"),
                ("Second", "Numbered Item (2)"),
                ("Third", "Numbered Item (3)"),
            ]
        );
    }

    #[test]
    fn continuation_lines_join_with_newline() {
        let items = detect_patterns("- buy milk\n  and eggs\n- call bob");
        assert_eq!(
            pairs(&items),
            vec![("buy milk\nand eggs", "Bullet Point"), ("call bob", "Bullet Point")]
        );
    }

    #[test]
    fn leading_unmatched_lines_are_dropped() {
        let items = detect_patterns("Shopping list:\n* apples\n* pears");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].content, "apples");
    }

    #[test]
    fn blank_line_ends_continuation() {
        let items = detect_patterns("1. one\n\nstray paragraph\n2. two");
        assert_eq!(
            pairs(&items),
            vec![("one", "Numbered Item (1)"), ("two", "Numbered Item (2)")]
        );
    }

    #[test]
    fn all_bullet_glyphs_are_recognised() {
        let items = detect_patterns("- dash\n* star\n• dot");
        assert!(items.iter().all(|i| i.kind == "Bullet Point"));
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn lettered_wins_over_single_letter_roman() {
        let items = detect_patterns("i. first\nii. second\nIV. fourth");
        assert_eq!(
            pairs(&items),
            vec![
                ("first", "Lettered Item (i)"),
                ("second", "Roman Numeral (ii)"),
                ("fourth", "Roman Numeral (IV)"),
            ]
        );
    }

    #[test]
    fn steps_accept_optional_colon_and_any_case() {
        let items = detect_patterns("Step 1: preheat\nSTEP 2 mix\nstep 10:   bake");
        assert_eq!(
            pairs(&items),
            vec![("preheat", "Step 1"), ("mix", "Step 2"), ("bake", "Step 10")]
        );
    }

    #[test]
    fn marker_without_body_is_not_an_item() {
        // "1." alone has no whitespace-separated body after trimming
        let items = detect_patterns("1.\n-\nStep 3:");
        assert!(items.is_empty());
    }

    #[test]
    fn crlf_input_is_trimmed() {
        let items = detect_patterns("1. First\r\n2. Second\r\n");
        assert_eq!(items[0].content, "First");
        assert_eq!(items[1].content, "Second");
    }

    #[test]
    fn plain_prose_yields_nothing() {
        assert!(detect_patterns("just some words\nacross lines").is_empty());
        assert!(detect_patterns("").is_empty());
    }

    #[test]
    fn indented_markers_still_match() {
        let items = detect_patterns("   a. nested\n   b. also nested");
        assert_eq!(items[1].kind, "Lettered Item (b)");
    }
}
