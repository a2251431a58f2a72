// src/core/html.rs
// Low-level HTML row scanning.
// Deliberately naive but tailored to the climate site's data tables:
// no DOM is built, only <tr>/</tr> boundaries and the text between tags
// matter. Tag names are matched case-insensitively on ASCII.

use crate::config::consts::MIN_ROW_CELLS;

/// Streaming row extractor for one page of markup.
///
/// Tracks whether the scan position is inside a `<tr>` block and
/// accumulates trimmed text nodes as cells. A row is kept only when its
/// closing tag arrives with at least [`MIN_ROW_CELLS`] cells collected;
/// shorter rows (site decoration, partial header fragments) are dropped.
///
/// Parser state is not reset between feeds. Use a fresh extractor per page.
pub struct RowExtractor {
    in_row: bool,
    current: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RowExtractor {
    pub fn new() -> Self {
        Self { in_row: false, current: Vec::new(), rows: Vec::new() }
    }

    /// Scan a chunk of markup. Feeding the whole document at once is fine.
    ///
    /// Unbalanced markup never panics: a `<tr>` with no matching close
    /// before end-of-input is simply never finalized, and a `<` with no
    /// closing `>` ends the scan.
    pub fn feed(&mut self, doc: &str) {
        let mut i = 0;
        while i < doc.len() {
            if doc.as_bytes()[i] == b'<' {
                // Comments may legally contain '>', skip them whole.
                if doc[i..].starts_with("<!--") {
                    match doc[i + 4..].find("-->") {
                        Some(rel) => {
                            i = i + 4 + rel + 3;
                            continue;
                        }
                        None => break,
                    }
                }
                match doc[i + 1..].find('>') {
                    Some(rel) => {
                        self.handle_tag(&doc[i + 1..i + 1 + rel]);
                        i = i + 1 + rel + 1;
                    }
                    None => break, // unterminated tag
                }
            } else {
                let end = doc[i..].find('<').map(|r| i + r).unwrap_or(doc.len());
                self.handle_text(&doc[i..end]);
                i = end;
            }
        }
    }

    /// Finished rows so far, in document order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    fn handle_tag(&mut self, body: &str) {
        if is_tag_ci(body, "tr") {
            self.in_row = true;
            self.current.clear();
        } else if is_closing_tag_ci(body, "tr") && self.in_row {
            self.in_row = false;
            if self.current.len() >= MIN_ROW_CELLS {
                self.rows.push(std::mem::take(&mut self.current));
            }
        }
        // Every other tag (td, th, abbr, a, ...) is just a cell separator.
    }

    fn handle_text(&mut self, raw: &str) {
        if !self.in_row {
            return;
        }
        let decoded = normalize_entities(raw);
        let cleaned = decoded.trim();
        if !cleaned.is_empty() {
            self.current.push(cleaned.to_string());
        }
    }
}

impl Default for RowExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// `body` is the inside of `<...>`. True for `tr`, `TR class=...`, `tr/`.
/// The character after the name must be a boundary, so `<track>` is not a row.
fn is_tag_ci(body: &str, name: &str) -> bool {
    // checked slice: garbage bytes in a tag must not panic mid-character
    match body.get(..name.len()) {
        Some(head) if head.eq_ignore_ascii_case(name) => {}
        _ => return false,
    }
    match body.as_bytes().get(name.len()) {
        None => true,
        Some(&c) => c.is_ascii_whitespace() || c == b'/',
    }
}

fn is_closing_tag_ci(body: &str, name: &str) -> bool {
    body.strip_prefix('/').is_some_and(|rest| is_tag_ci(rest.trim_start(), name))
}

/// Minimal entity decoding: the data tables only ever need these.
/// `&nbsp;` becomes U+00A0 so that whitespace-only nodes still trim away.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", "\u{a0}").replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_name_needs_boundary() {
        assert!(is_tag_ci("tr", "tr"));
        assert!(is_tag_ci("TR class=\"day\"", "tr"));
        assert!(is_tag_ci("tr/", "tr"));
        assert!(!is_tag_ci("track", "tr"));
        assert!(!is_tag_ci("t", "tr"));
        assert!(is_closing_tag_ci("/tr", "tr"));
        assert!(is_closing_tag_ci("/TR ", "tr"));
        assert!(!is_closing_tag_ci("tr", "tr"));
    }

    #[test]
    fn collects_cells_in_document_order() {
        let mut x = RowExtractor::new();
        x.feed("<table><tr><td>1</td><td>-5.2</td><td>-13.9</td><td>-9.6</td></tr></table>");
        assert_eq!(x.rows(), &[vec!["1", "-5.2", "-13.9", "-9.6"]
            .into_iter().map(String::from).collect::<Vec<_>>()]);
    }

    #[test]
    fn short_rows_are_dropped() {
        let mut x = RowExtractor::new();
        x.feed("<tr><td>Date</td></tr><tr><td>1</td><td>2</td><td>3</td><td>4</td></tr>");
        assert_eq!(x.rows().len(), 1);
        assert_eq!(x.rows()[0][0], "1");
    }

    #[test]
    fn whitespace_only_nodes_collapse() {
        let mut x = RowExtractor::new();
        x.feed("<tr>\n  <td> 1 </td>\n  <td>&nbsp;</td><td>2</td><td>3</td><td>4</td>\n</tr>");
        // the &nbsp; node trims to nothing and never becomes a cell
        assert_eq!(x.rows()[0], vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn text_outside_rows_is_ignored() {
        let mut x = RowExtractor::new();
        x.feed("junk<table>header text<tr><td>1</td><td>2</td><td>3</td><td>4</td></tr>tail");
        assert_eq!(x.rows().len(), 1);
        assert_eq!(x.rows()[0].len(), 4);
    }

    #[test]
    fn unterminated_row_is_never_finalized() {
        let mut x = RowExtractor::new();
        x.feed("<tr><td>1</td><td>2</td><td>3</td><td>4</td>");
        assert!(x.rows().is_empty());
    }

    #[test]
    fn unterminated_tag_ends_scan_quietly() {
        let mut x = RowExtractor::new();
        x.feed("<tr><td>1</td><td");
        assert!(x.rows().is_empty());
    }

    #[test]
    fn nested_markup_inside_cells_separates_text_nodes() {
        // <abbr> wrappers produce separate text nodes, same as the source pages
        let mut x = RowExtractor::new();
        x.feed("<tr><td><a href=\"x\">5</a></td><td>1.0</td><td>2.0</td><td>3.0</td></tr>");
        assert_eq!(x.rows()[0], vec!["5", "1.0", "2.0", "3.0"]);
    }

    #[test]
    fn comments_with_angle_brackets_are_skipped() {
        let mut x = RowExtractor::new();
        x.feed("<tr><!-- if a > b --><td>1</td><td>2</td><td>3</td><td>4</td></tr>");
        assert_eq!(x.rows()[0], vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn row_start_resets_a_dangling_row() {
        // first tr never closes; second tr must start clean
        let mut x = RowExtractor::new();
        x.feed("<tr><td>stale</td><tr><td>1</td><td>2</td><td>3</td><td>4</td></tr>");
        assert_eq!(x.rows().len(), 1);
        assert_eq!(x.rows()[0], vec!["1", "2", "3", "4"]);
    }
}
