//! Text rendering for failed assertions.
//!
//! A correspondence is printed as two tables, one per sequence. Each table has
//! an index row and a value row; the matched sequence adds a relative-index
//! row (`*` where nothing matched) and the pool sequence marks its unconsumed
//! positions with `^`. Every column is padded to its widest cell.

use ctest_collections::Value;
use tracing::warn;

use crate::permutation::Correspondence;

pub const NO_CORRESPONDENCE: &str = "*";
pub const UNMATCHED_MARK: &str = "^";

const ELLIPSIS: &str = "...";

/// A sequence together with the name it is printed under.
#[derive(Debug, Clone, Copy)]
pub struct Labeled<'a> {
    pub label: &'a str,
    pub values: &'a [Value],
}

impl<'a> Labeled<'a> {
    pub fn new(label: &'a str, values: &'a [Value]) -> Self {
        Self { label, values }
    }
}

/// Render `matched` (whose elements were looked up) against `pool` (the
/// sequence the counter was built from).
pub fn render_correspondence(
    matched: Labeled<'_>,
    pool: Labeled<'_>,
    correspondence: &Correspondence,
) -> String {
    let relative: Vec<String> = correspondence
        .relative_indices
        .iter()
        .map(|rel| rel.map_or_else(|| NO_CORRESPONDENCE.to_string(), |i| i.to_string()))
        .collect();
    let unmatched: Vec<String> = (0..pool.values.len())
        .map(|i| {
            if correspondence.unmatched_reference.binary_search(&i).is_ok() {
                UNMATCHED_MARK.to_string()
            } else {
                String::new()
            }
        })
        .collect();

    let mut out = String::new();
    render_table(
        &mut out,
        matched.label,
        &[
            ("index", index_row(matched.values.len())),
            ("value", value_row(matched.values)),
            ("rel. index", relative),
        ],
    );
    render_table(
        &mut out,
        pool.label,
        &[
            ("index", index_row(pool.values.len())),
            ("value", value_row(pool.values)),
            ("unmatched", unmatched),
        ],
    );
    out
}

/// Render `values` with the positions in `highlight` marked by `^`.
pub fn render_highlighted(sequence: Labeled<'_>, highlight: &[usize]) -> String {
    let marks = (0..sequence.values.len())
        .map(|i| {
            if highlight.contains(&i) {
                UNMATCHED_MARK.to_string()
            } else {
                String::new()
            }
        })
        .collect();
    let mut out = String::new();
    render_table(
        &mut out,
        sequence.label,
        &[
            ("index", index_row(sequence.values.len())),
            ("value", value_row(sequence.values)),
            ("missing", marks),
        ],
    );
    out
}

/// Cut `message` to at most `max_chars` characters, ending in `...` when cut.
pub fn truncate(message: &str, max_chars: usize) -> String {
    let len = message.chars().count();
    if len <= max_chars {
        return message.to_string();
    }
    warn!(len, max_chars, "diagnostic message truncated");
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut cut: String = message.chars().take(keep).collect();
    cut.push_str(&ELLIPSIS[..max_chars.min(ELLIPSIS.len())]);
    cut
}

fn index_row(len: usize) -> Vec<String> {
    (0..len).map(|i| i.to_string()).collect()
}

fn value_row(values: &[Value]) -> Vec<String> {
    values.iter().map(Value::to_string).collect()
}

fn render_table(out: &mut String, title: &str, rows: &[(&str, Vec<String>)]) {
    out.push_str(title);
    out.push_str(":\n");

    let columns = rows.iter().map(|(_, cells)| cells.len()).max().unwrap_or(0);
    if columns == 0 {
        out.push_str("  (empty)\n");
        return;
    }

    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            rows.iter()
                .filter_map(|(_, cells)| cells.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    for (label, cells) in rows {
        let mut line = format!("  {label:<label_width$} |");
        for (cell, &width) in cells.iter().zip(&widths) {
            line.push_str(&format!(" {cell:>width$}"));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_are_width_matched() {
        let target = vec![Value::from(1i64), Value::from(200i64)];
        let reference = vec![Value::from(200i64), Value::from(7i64)];
        let correspondence = Correspondence {
            relative_indices: vec![None, Some(0)],
            unmatched_reference: vec![1],
        };
        let text = render_correspondence(
            Labeled::new("target", &target),
            Labeled::new("reference", &reference),
            &correspondence,
        );
        let expected = "\
target:
  index      | 0   1
  value      | 1 200
  rel. index | *   0
reference:
  index     |   0 1
  value     | 200 7
  unmatched |     ^
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_sequence_table() {
        let correspondence = Correspondence {
            relative_indices: vec![],
            unmatched_reference: vec![],
        };
        let text = render_correspondence(
            Labeled::new("target", &[]),
            Labeled::new("reference", &[]),
            &correspondence,
        );
        assert_eq!(text, "target:\n  (empty)\nreference:\n  (empty)\n");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 6), "abc...");
        assert_eq!(truncate("abcdef", 2), "..");
        assert_eq!(truncate("ééééé", 4), "é...");
    }
}
