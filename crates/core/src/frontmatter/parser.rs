//! Front-matter scanning for the `summary` and `read_when` keys.
//!
//! This is deliberately not a YAML parser. The header block is read line by
//! line with two states: idle, or capturing a `read_when` bullet list.

use super::types::{ExtractionStatus, FrontMatter};

const DELIMITER: &str = "---";
const SUMMARY_KEY: &str = "summary:";
const READ_WHEN_KEY: &str = "read_when:";

/// Parse front matter from document content.
///
/// The block must open on the very first line:
/// ```markdown
/// ---
/// summary: Deploying the API
/// read_when: [deploys, release]
/// ---
/// # Document content
/// ```
pub fn parse_front_matter(content: &str) -> FrontMatter {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.lines();

    if !lines.next().is_some_and(is_delimiter) {
        return FrontMatter::failed(ExtractionStatus::MissingDelimiter);
    }

    let mut scanner = Scanner::default();
    let mut closed = false;
    for line in lines {
        if is_delimiter(line) {
            closed = true;
            break;
        }
        scanner.feed(line);
    }

    if !closed {
        return FrontMatter::failed(ExtractionStatus::UnterminatedBlock);
    }

    scanner.finish()
}

fn is_delimiter(line: &str) -> bool {
    line.strip_suffix('\r').unwrap_or(line) == DELIMITER
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ScanState {
    #[default]
    Idle,
    CapturingList,
}

#[derive(Debug, Default)]
struct Scanner {
    state: ScanState,
    raw_summary: Option<String>,
    read_when: Vec<String>,
}

impl Scanner {
    fn feed(&mut self, raw: &str) {
        let line = raw.trim();

        if let Some(rest) = line.strip_prefix(SUMMARY_KEY) {
            // Last occurrence wins.
            self.raw_summary = Some(rest.to_string());
            self.state = ScanState::Idle;
            return;
        }

        if let Some(rest) = line.strip_prefix(READ_WHEN_KEY) {
            let rest = rest.trim();
            if let Some(inner) = rest.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
                self.read_when.extend(parse_inline_list(inner).unwrap_or_default());
                self.state = ScanState::Idle;
            } else {
                self.state = ScanState::CapturingList;
            }
            return;
        }

        if self.state == ScanState::CapturingList {
            if line.is_empty() {
                return;
            }
            if let Some(item) = bullet_item(line) {
                if !item.is_empty() {
                    self.read_when.push(item.to_string());
                }
                return;
            }
            // Not a bullet: the list is over and this line was not a known key.
            self.state = ScanState::Idle;
        }
    }

    fn finish(self) -> FrontMatter {
        let status = match self.raw_summary {
            None => ExtractionStatus::MissingSummaryKey,
            Some(raw) => {
                let summary = normalize_summary(&raw);
                if summary.is_empty() {
                    ExtractionStatus::EmptySummary
                } else {
                    ExtractionStatus::Success { summary }
                }
            }
        };
        FrontMatter { status, read_when: self.read_when }
    }
}

fn bullet_item(line: &str) -> Option<&str> {
    if line == "-" {
        return Some("");
    }
    line.strip_prefix("- ").map(str::trim)
}

/// Parse the inside of `[a, "b, c", 'd']`.
///
/// Returns `None` when the content is malformed: nested brackets, an
/// unterminated quote, or text trailing a quoted item.
fn parse_inline_list(inner: &str) -> Option<Vec<String>> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for ch in inner.chars() {
        if let Some(q) = quote {
            if ch == q {
                quote = None;
            }
            current.push(ch);
            continue;
        }
        match ch {
            '[' | ']' => return None,
            '"' | '\'' if current.trim().is_empty() => {
                quote = Some(ch);
                current.push(ch);
            }
            ',' => items.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    if quote.is_some() {
        return None;
    }
    items.push(current);

    let mut hints = Vec::new();
    for item in &items {
        let item = item.trim();
        let value = if item.starts_with(['"', '\'']) {
            let unquoted = strip_matching_quotes(item);
            if unquoted.len() == item.len() {
                return None;
            }
            unquoted.trim()
        } else {
            item
        };
        if !value.is_empty() {
            hints.push(value.to_string());
        }
    }
    Some(hints)
}

fn strip_matching_quotes(s: &str) -> &str {
    for q in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(q) && s.ends_with(q) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

fn normalize_summary(raw: &str) -> String {
    strip_matching_quotes(raw.trim()).split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn hints(fm: &FrontMatter) -> Vec<&str> {
        fm.read_when.iter().map(String::as_str).collect()
    }

    #[rstest]
    #[case::no_block("# Title\n\nbody", ExtractionStatus::MissingDelimiter)]
    #[case::empty_file("", ExtractionStatus::MissingDelimiter)]
    #[case::leading_blank_line("\n---\nsummary: x\n---\n", ExtractionStatus::MissingDelimiter)]
    #[case::four_dashes("----\nsummary: x\n---\n", ExtractionStatus::MissingDelimiter)]
    #[case::never_closed("---\nsummary: x\n# Body", ExtractionStatus::UnterminatedBlock)]
    #[case::only_opening("---", ExtractionStatus::UnterminatedBlock)]
    #[case::no_summary("---\ntitle: x\n---\n", ExtractionStatus::MissingSummaryKey)]
    #[case::empty_block("---\n---\n", ExtractionStatus::MissingSummaryKey)]
    #[case::blank_summary("---\nsummary:\n---\n", ExtractionStatus::EmptySummary)]
    #[case::quoted_blank("---\nsummary: \"   \"\n---\n", ExtractionStatus::EmptySummary)]
    fn failure_statuses(#[case] content: &str, #[case] expected: ExtractionStatus) {
        let fm = parse_front_matter(content);
        assert_eq!(fm.status, expected);
        assert_eq!(fm.summary(), None);
    }

    #[rstest]
    #[case::plain("summary: REST API", "REST API")]
    #[case::double_quoted("summary: \"  REST   API \"", "REST API")]
    #[case::single_quoted("summary: 'Auth flow'", "Auth flow")]
    #[case::mismatched_quotes("summary: \"Auth flow'", "\"Auth flow'")]
    #[case::tabs_collapsed("summary: a\t\tb   c", "a b c")]
    #[case::inner_quotes_kept("summary: The \"fast\" path", "The \"fast\" path")]
    fn summary_normalization(#[case] line: &str, #[case] expected: &str) {
        let fm = parse_front_matter(&format!("---\n{line}\n---\n"));
        assert_eq!(fm.summary(), Some(expected));
    }

    #[test]
    fn last_summary_wins() {
        let fm = parse_front_matter("---\nsummary: first\nsummary: second\n---\n");
        assert_eq!(fm.summary(), Some("second"));
    }

    #[test]
    fn later_blank_summary_overrides_earlier_value() {
        let fm = parse_front_matter("---\nsummary: first\nsummary:\n---\n");
        assert_eq!(fm.status, ExtractionStatus::EmptySummary);
    }

    #[test]
    fn inline_list() {
        let fm = parse_front_matter("---\nsummary: x\nread_when: [API, auth]\n---\n");
        assert_eq!(hints(&fm), vec!["API", "auth"]);
    }

    #[test]
    fn inline_list_with_quoted_items() {
        let fm = parse_front_matter(
            "---\nsummary: x\nread_when: [\"adding routes, handlers\", 'tests', ]\n---\n",
        );
        assert_eq!(hints(&fm), vec!["adding routes, handlers", "tests"]);
    }

    #[rstest]
    #[case::nested("read_when: [a, [b]]")]
    #[case::unterminated_quote("read_when: [\"a, b]")]
    #[case::trailing_text("read_when: [\"a\" b, c]")]
    #[case::empty("read_when: []")]
    fn malformed_or_empty_inline_list_yields_no_hints(#[case] line: &str) {
        let fm = parse_front_matter(&format!("---\nsummary: ok\n{line}\n---\n"));
        assert!(fm.read_when.is_empty());
        assert_eq!(fm.summary(), Some("ok"));
    }

    #[test]
    fn inline_list_ends_capture() {
        let fm = parse_front_matter("---\nsummary: x\nread_when: [a]\n- b\n---\n");
        assert_eq!(hints(&fm), vec!["a"]);
    }

    #[test]
    fn block_list_skips_blank_lines() {
        let fm = parse_front_matter(concat!(
            "---\nsummary: x\nread_when:\n",
            "  - adding endpoints\n\n  - auth changes\n  - db migrations\n---\n",
        ));
        assert_eq!(hints(&fm), vec!["adding endpoints", "auth changes", "db migrations"]);
    }

    #[test]
    fn block_list_ends_on_other_line() {
        let fm = parse_front_matter(
            "---\nread_when:\n- one\nowner: someone\n- stray\nsummary: late\n---\n",
        );
        assert_eq!(hints(&fm), vec!["one"]);
        assert_eq!(fm.summary(), Some("late"));
    }

    #[test]
    fn summary_line_ends_capture() {
        let fm = parse_front_matter("---\nread_when:\n- one\nsummary: s\n- two\n---\n");
        assert_eq!(hints(&fm), vec!["one"]);
        assert_eq!(fm.summary(), Some("s"));
    }

    #[test]
    fn empty_bullets_are_skipped() {
        let fm = parse_front_matter("---\nsummary: s\nread_when:\n-\n-   \n- real\n---\n");
        assert_eq!(hints(&fm), vec!["real"]);
    }

    #[test]
    fn duplicate_hints_are_kept_in_order() {
        let fm = parse_front_matter(
            "---\nsummary: s\nread_when: [a, b]\nread_when:\n- a\n---\n",
        );
        assert_eq!(hints(&fm), vec!["a", "b", "a"]);
    }

    #[test]
    fn hints_survive_missing_summary() {
        let fm = parse_front_matter("---\nread_when: [a]\n---\n");
        assert_eq!(fm.status, ExtractionStatus::MissingSummaryKey);
        assert_eq!(hints(&fm), vec!["a"]);
    }

    #[test]
    fn content_after_closing_delimiter_is_ignored() {
        let fm = parse_front_matter("---\nsummary: head\n---\nsummary: body\n---\n");
        assert_eq!(fm.summary(), Some("head"));
    }

    #[test]
    fn crlf_and_bom_are_tolerated() {
        let fm = parse_front_matter(
            "\u{feff}---\r\nsummary: windows\r\nread_when:\r\n- x\r\n---\r\n",
        );
        assert_eq!(fm.summary(), Some("windows"));
        assert_eq!(hints(&fm), vec!["x"]);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let fm = parse_front_matter("---\ntitle: T\ntags: [a]\nsummary: s\n---\n");
        assert_eq!(fm.summary(), Some("s"));
        assert!(fm.read_when.is_empty());
    }
}
