//! URL slugs for hierarchical entities (sections, departments, centers).
//!
//! Slugs are composed of lowercase ASCII letters, digits and hyphens.
//! Uniqueness is the API's business; nothing here checks it.

/// Turn a human-readable name into a slug.
///
/// Steps, in order: lowercase, collapse each whitespace run into one `-`,
/// drop every character outside `[a-z0-9-]`. Existing hyphens are kept as is.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();

    let mut hyphenated = String::with_capacity(lowered.len());
    let mut in_whitespace = false;
    for ch in lowered.chars() {
        if is_space(ch) {
            if !in_whitespace {
                hyphenated.push('-');
            }
            in_whitespace = true;
        } else {
            hyphenated.push(ch);
            in_whitespace = false;
        }
    }

    hyphenated.retain(is_slug_char);
    hyphenated
}

/// Return `true` when `value` is a non-empty slug.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty() && value.chars().all(is_slug_char)
}

/// The ECMAScript `\s` class: Unicode space separators, the ASCII
/// whitespace controls, line/paragraph separators and the BOM. Unlike
/// `char::is_whitespace` it excludes U+0085.
fn is_space(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

fn is_slug_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-'
}

/// Paired "name" and "slug" inputs of a creation dialog.
///
/// Every name edit regenerates the slug, replacing whatever was typed into
/// the slug input since the previous name edit. Slug edits stick only until
/// the next name keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugPair {
    pub name: String,
    pub slug: String,
}

impl SlugPair {
    pub fn edit_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.slug = slugify(&self.name);
    }

    pub fn edit_slug(&mut self, slug: impl Into<String>) {
        self.slug = slug.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_examples() {
        assert_eq!(slugify("Department Sections!"), "department-sections");
        assert_eq!(slugify("Materials   Lab"), "materials-lab");
        assert_eq!(slugify("  Chemistry\tUnit 2 "), "-chemistry-unit-2-");
        assert_eq!(slugify("R&D - Labs"), "rd---labs");
        assert_eq!(slugify("قسم الكيمياء"), "-");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slugify_output_alphabet_and_idempotence() {
        let inputs = [
            "Department Sections!",
            "ÉCOLE Normale",
            "a_b.c/d",
            "Nano\n\nTech 101",
            "---",
            "Ünïcödé  Çase",
        ];
        for input in inputs {
            let slug = slugify(input);
            assert!(slug.chars().all(is_slug_char), "{input:?} -> {slug:?}");
            assert_eq!(slugify(&slug), slug);
        }
    }

    #[test]
    fn test_slugify_whitespace_class() {
        assert_eq!(slugify("Optics\u{FEFF}Lab"), "optics-lab");
        assert_eq!(slugify("Optics\u{A0}\u{3000}Lab"), "optics-lab");
        // NEL is not a separator, it is simply dropped
        assert_eq!(slugify("Optics\u{85}Lab"), "opticslab");
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("department-sections"));
        assert!(is_valid_slug("lab-2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Upper"));
        assert!(!is_valid_slug("with space"));
    }

    #[test]
    fn test_name_edit_overwrites_manual_slug() {
        let mut pair = SlugPair::default();
        pair.edit_name("Applied Physics");
        assert_eq!(pair.slug, "applied-physics");

        pair.edit_slug("physics");
        assert_eq!(pair.slug, "physics");

        pair.edit_name("Applied Physics Dept");
        assert_eq!(pair.slug, "applied-physics-dept");
    }
}
