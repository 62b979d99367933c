/// Extracts every word from a card layout, horizontal words first, then
/// vertical words, each group in reading order.
///
/// A word is a maximal run of non-blank characters longer than one character;
/// `'.'` marks a blank cell. Whether the letters themselves are legal is the
/// card validator's concern, not ours.
pub fn extract_words(layout: &[String]) -> Vec<String> {
    let mut words = row_words(layout);
    words.extend(row_words(&transpose(layout)));
    words
}

fn row_words(rows: &[String]) -> Vec<String> {
    let mut words = Vec::new();
    for row in rows {
        for run in row.split('.') {
            if run.len() > 1 {
                words.push(run.to_string());
            }
        }
    }
    words
}

/// Turns column `i` into row `i`. Rows longer than the shortest row are
/// truncated, matching zip semantics; on rectangular grids this is an
/// involution.
pub fn transpose(rows: &[String]) -> Vec<String> {
    let width = rows.iter().map(|row| row.chars().count()).min().unwrap_or(0);
    let mut columns = vec![String::new(); width];
    for row in rows {
        for (column, c) in columns.iter_mut().zip(row.chars()) {
            column.push(c);
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(rows: &[&str]) -> Vec<String> {
        rows.iter().map(|row| row.to_string()).collect()
    }

    #[test]
    fn test_single_letter_runs_are_discarded() {
        // "s" and "j" are blanks-separated single letters, not words
        let words = extract_words(&layout(&["vase..s..j."]));
        assert_eq!(words, vec!["vase".to_string()]);
    }

    #[test]
    fn test_row_without_blanks_is_one_word() {
        let words = extract_words(&layout(&["vase"]));
        assert_eq!(words, vec!["vase".to_string()]);
    }

    #[test]
    fn test_all_blank_row_yields_no_words() {
        assert!(extract_words(&layout(&["....."])).is_empty());
    }

    #[test]
    fn test_only_single_letters_yields_no_words() {
        assert!(extract_words(&layout(&["a.b.c"])).is_empty());
    }

    #[test]
    fn test_horizontal_words_come_before_vertical_words() {
        let words = extract_words(&layout(&["ab", "cd"]));
        assert_eq!(
            words,
            vec![
                "ab".to_string(),
                "cd".to_string(),
                "ac".to_string(),
                "bd".to_string(),
            ]
        );
    }

    #[test]
    fn test_vertical_word_spans_blank_free_column() {
        let words = extract_words(&layout(&["a.", "b.", "c."]));
        assert_eq!(words, vec!["abc".to_string()]);
    }

    #[test]
    fn test_transpose_rectangle() {
        let transposed = transpose(&layout(&["abc", "def"]));
        assert_eq!(transposed, layout(&["ad", "be", "cf"]));
    }

    #[test]
    fn test_transpose_twice_restores_rectangle() {
        let grid = layout(&["ab.d", ".fgh", "ijk."]);
        assert_eq!(transpose(&transpose(&grid)), grid);
    }

    #[test]
    fn test_transpose_truncates_to_shortest_row() {
        let transposed = transpose(&layout(&["abc", "de"]));
        assert_eq!(transposed, layout(&["ad", "be"]));
    }

    #[test]
    fn test_transpose_empty_grid() {
        assert!(transpose(&[]).is_empty());
    }
}
