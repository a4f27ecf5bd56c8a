/// Cut `text` to at most `max_chars` characters, marking the cut with `...`.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}

/// Group a digit string in thousands for display: "1234567" -> "¥1,234,567"
pub fn fmt_yen(digits: &str) -> String {
    if digits.is_empty() {
        return String::new();
    }

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("¥{}", grouped.chars().rev().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_chars("事務用品", 40), "事務用品");
    }

    #[test]
    fn long_text_is_cut_on_char_boundary() {
        let text = "あ".repeat(45);
        let cut = truncate_chars(&text, 40);
        assert_eq!(cut.chars().count(), 43);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn yen_grouping() {
        assert_eq!(fmt_yen(""), "");
        assert_eq!(fmt_yen("980"), "¥980");
        assert_eq!(fmt_yen("1000"), "¥1,000");
        assert_eq!(fmt_yen("1234567"), "¥1,234,567");
    }
}
