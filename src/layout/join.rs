//! Joining rendered blocks side by side or stacked.

use crate::measure::line_width;
use crate::types::Position;

/// Place blocks next to each other, left to right.
///
/// Each block keeps its own width (its widest line). Blocks shorter than
/// the tallest one gain blank lines according to `position`: `Top` fills
/// below, `Bottom` above, `Center` splits with the extra line below.
///
/// ```
/// use spark_gloss::{Position, join_horizontal};
///
/// assert_eq!(join_horizontal(Position::Top, &["a\nbb", "c"]), "a c\nbb ");
/// ```
pub fn join_horizontal<S: AsRef<str>>(position: Position, blocks: &[S]) -> String {
    match blocks {
        [] => return String::new(),
        [only] => return only.as_ref().to_string(),
        _ => {}
    }

    let columns: Vec<Vec<&str>> = blocks
        .iter()
        .map(|block| block.as_ref().split('\n').collect())
        .collect();
    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);

    let mut out = vec![String::new(); rows];
    for lines in &columns {
        let width = lines.iter().map(|l| line_width(l)).max().unwrap_or(0);
        let (before, _) = position.split(rows - lines.len());

        for (r, row) in out.iter_mut().enumerate() {
            let line = r
                .checked_sub(before)
                .and_then(|i| lines.get(i))
                .copied()
                .unwrap_or("");
            row.push_str(line);
            row.push_str(&" ".repeat(width - line_width(line)));
        }
    }

    out.join("\n")
}

/// Stack blocks on top of each other.
///
/// Every line is padded to the widest line across all blocks according to
/// `position`: `Left` pads on the right, `Right` on the left, `Center`
/// splits with the odd cell on the right.
pub fn join_vertical<S: AsRef<str>>(position: Position, blocks: &[S]) -> String {
    match blocks {
        [] => return String::new(),
        [only] => return only.as_ref().to_string(),
        _ => {}
    }

    let lines: Vec<&str> = blocks
        .iter()
        .flat_map(|block| block.as_ref().split('\n'))
        .collect();
    let width = lines.iter().map(|l| line_width(l)).max().unwrap_or(0);

    lines
        .iter()
        .map(|line| {
            let (before, after) = position.split(width - line_width(line));
            format!("{}{line}{}", " ".repeat(before), " ".repeat(after))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
