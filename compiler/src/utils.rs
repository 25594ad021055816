use serde_json;

pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap()
}

/// Uppercases the first character, leaving the rest untouched.
/// Used to synthesize enum type names from field names.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().to_string() + chars.as_str(),
    }
}

/// Converts a string to PascalCase.
/// - Underscore-separated words are each title-cased.
/// - A fully uppercase input (e.g. "PENDING") keeps only its first letter
///   uppercase.
/// - Otherwise only the first letter is forced uppercase.
pub fn to_pascal_case(s: &str) -> String {
    if s.contains('_') {
        s.split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
                }
            })
            .collect::<String>()
    } else if s == s.to_uppercase() {
        let mut chars = s.chars();
        match chars.next() {
            None => String::new(),
            Some(first) => first.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
        }
    } else {
        capitalize(s)
    }
}

/// Converts a string to snake_case without splitting acronyms
/// (e.g. "sessionID" becomes "session_id", "entryDate" becomes "entry_date").
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut snake = String::new();
    for i in 0..chars.len() {
        let c = chars[i];
        if c.is_uppercase() {
            if i > 0 {
                let prev = chars[i - 1];
                if !prev.is_uppercase() || (i + 1 < chars.len() && chars[i + 1].is_lowercase()) {
                    snake.push('_');
                }
            }
            snake.push(c.to_lowercase().next().unwrap());
        } else {
            snake.push(c);
        }
    }
    snake
}

/// Escapes Rust keywords so they are usable as field or variant identifiers.
/// Keywords that cannot be raw identifiers get an underscore suffix instead.
pub fn escape_ident(s: &str) -> String {
    match s {
        "as" | "async" | "await" | "break" | "const" | "continue" | "dyn" | "else" | "enum"
        | "extern" | "false" | "fn" | "for" | "if" | "impl" | "in" | "let" | "loop" | "match"
        | "mod" | "move" | "mut" | "pub" | "ref" | "return" | "static" | "struct" | "trait"
        | "true" | "type" | "unsafe" | "use" | "where" | "while" => format!("r#{}", s),
        "self" | "Self" | "super" | "crate" => format!("{}_", s),
        _ => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("status"), "Status");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_pascal_case("PENDING"), "Pending");
        assert_eq!(to_pascal_case("inProgress"), "InProgress");
        assert_eq!(to_pascal_case("two_words"), "TwoWords");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("entryDate"), "entry_date");
        assert_eq!(to_snake_case("sessionID"), "session_id");
        assert_eq!(to_snake_case("name"), "name");
    }

    #[test]
    fn test_escape_ident() {
        assert_eq!(escape_ident("type"), "r#type");
        assert_eq!(escape_ident("self"), "self_");
        assert_eq!(escape_ident("amount"), "amount");
    }
}
