use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HEADER_TOKEN: Regex = Regex::new(r"\[[^\]]+\]").unwrap();
}

/// Splits a schema document immediately before every bracketed header token,
/// without consuming the token itself, then trims the pieces and drops empty
/// ones. Text before the first header survives as its own piece so that the
/// header parser can reject it.
///
/// Split positions include token starts that fall inside an earlier token
/// match, so the cut points are exactly the zero-width lookahead boundaries.
pub fn split_document(text: &str) -> Vec<&str> {
    let mut starts = Vec::new();
    let mut at = 0;
    while let Some(m) = HEADER_TOKEN.find_at(text, at) {
        starts.push(m.start());
        at = m.start() + 1;
    }

    let mut pieces = Vec::new();
    let mut prev = 0;
    for &start in &starts {
        if start > prev {
            pieces.push(&text[prev..start]);
        }
        prev = start;
    }
    pieces.push(&text[prev..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_two_blocks() {
        let input = "[budget.Vendor]\nname = String\n\n[budget.Tag]\nname = String\n";
        let pieces = split_document(input);
        assert_eq!(pieces.len(), 2);
        assert!(pieces[0].starts_with("[budget.Vendor]"));
        assert!(pieces[0].ends_with("name = String"));
        assert!(pieces[1].starts_with("[budget.Tag]"));
    }

    #[test]
    fn test_split_back_to_back_headers() {
        let input = "[a.B][c.D]";
        let pieces = split_document(input);
        assert_eq!(pieces, vec!["[a.B]", "[c.D]"]);
    }

    #[test]
    fn test_split_keeps_leading_junk_as_piece() {
        let input = "junk before\n[a.B]\nx = Y\n";
        let pieces = split_document(input);
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0], "junk before");
    }

    #[test]
    fn test_split_empty_document() {
        assert!(split_document("").is_empty());
        assert!(split_document("   \n  ").is_empty());
    }

    #[test]
    fn test_split_no_header_yields_single_piece() {
        let pieces = split_document("name = String");
        assert_eq!(pieces, vec!["name = String"]);
    }
}
