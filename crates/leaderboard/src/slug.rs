const MAX_SLUG_LEN: usize = 80;

/// Lowercase ASCII slug with single dashes between words.
pub fn slugify(input: &str) -> String {
    let mut slug = String::new();
    let mut last_was_dash = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_dash = false;
        } else if (ch.is_ascii() || ch.is_whitespace()) && !slug.is_empty() && !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.len() > MAX_SLUG_LEN {
        slug.truncate(MAX_SLUG_LEN);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::slugify;

    #[test_case("Torneo de Pesca 2024", "torneo-de-pesca-2024" ; "words and digits")]
    #[test_case("  Marlin -- Open!  ", "marlin-open" ; "punctuation collapses")]
    #[test_case("Copa Dorado", "copa-dorado" ; "two words")]
    #[test_case("Año Nuevo", "ao-nuevo" ; "non ascii is dropped")]
    #[test_case("", "" ; "empty")]
    fn slugify_cases(input: &str, expected: &str) {
        assert_eq!(slugify(input), expected);
    }

    #[test]
    fn long_names_are_truncated() {
        let slug = slugify(&"a".repeat(200));
        assert_eq!(slug.len(), 80);
    }
}
