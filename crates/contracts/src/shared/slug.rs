//! URL slug generation for published content.

/// Maximum slug length, matching the column width used for URLs.
pub const MAX_SLUG_LEN: usize = 100;

/// Produce a URL-safe slug from an arbitrary title.
///
/// Lowercases and trims the input, drops everything outside `[a-z0-9\s-]`,
/// collapses whitespace runs and repeated hyphens to a single hyphen and caps
/// the result at [`MAX_SLUG_LEN`] characters. Total: any input (including the
/// empty string) yields a valid, possibly empty, slug. Idempotent on slugs
/// that are already well-formed.
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len().min(MAX_SLUG_LEN));
    let mut pending_hyphen = false;

    for ch in title.trim().to_lowercase().chars() {
        let mapped = match ch {
            'a'..='z' | '0'..='9' => Some(ch),
            c if c.is_whitespace() => None,
            '-' => None,
            _ => continue,
        };
        match mapped {
            Some(c) => {
                if pending_hyphen && !out.is_empty() {
                    if out.len() + 1 >= MAX_SLUG_LEN {
                        break;
                    }
                    out.push('-');
                }
                pending_hyphen = false;
                if out.len() >= MAX_SLUG_LEN {
                    break;
                }
                out.push(c);
            }
            // Whitespace and hyphens only materialize once a real character follows
            None => pending_hyphen = true,
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_title() {
        assert_eq!(
            slugify("AI in Claims Processing"),
            "ai-in-claims-processing"
        );
    }

    #[test]
    fn strips_special_characters() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("100% Growth (YoY)"), "100-growth-yoy");
    }

    #[test]
    fn collapses_whitespace_and_hyphens() {
        assert_eq!(slugify("a   b"), "a-b");
        assert_eq!(slugify("a -- b"), "a-b");
        assert_eq!(slugify("a - - b"), "a-b");
    }

    #[test]
    fn trims_edges() {
        assert_eq!(slugify("  padded title  "), "padded-title");
        assert_eq!(slugify("-leading-and-trailing-"), "leading-and-trailing");
    }

    #[test]
    fn empty_and_symbol_only_inputs() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("   "), "");
    }

    #[test]
    fn idempotent() {
        for input in [
            "AI in Claims Processing",
            "Hello, World!",
            "",
            "already-a-slug",
            "  Mixed CASE & Symbols #42  ",
        ] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn caps_length_at_100() {
        let long = "word ".repeat(100);
        let slug = slugify(&long);
        assert!(slug.len() <= MAX_SLUG_LEN);
        // Never ends on a dangling hyphen after truncation
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn output_charset() {
        let slug = slugify("Ünïcödé & Emoji 🚀 Test 123");
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }
}
