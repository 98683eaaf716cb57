use leptos::prelude::*;

/// Inline SVG glyphs on a 24x24 stroke grid: `(name, rendered size, body)`.
const GLYPHS: &[(&str, u8, &str)] = &[
    ("x", 16, r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#),
    ("plus", 16, r#"<path d="M12 5v14"/><path d="M5 12h14"/>"#),
    ("refresh", 16, r#"<path d="M21 12a9 9 0 1 1-2.64-6.36"/><path d="M21 3v6h-6"/>"#),
    ("edit", 16, r#"<path d="M12 20h9"/><path d="M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4z"/>"#),
    (
        "delete",
        16,
        r#"<path d="M3 6h18"/><path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6"/><path d="M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"/>"#,
    ),
    (
        "globe",
        16,
        r#"<circle cx="12" cy="12" r="10"/><path d="M2 12h20"/><path d="M12 2a15.3 15.3 0 0 1 0 20 15.3 15.3 0 0 1 0-20z"/>"#,
    ),
    ("chevron-right", 16, r#"<polyline points="9 18 15 12 9 6"/>"#),
    ("layers", 20, r#"<path d="m12 2 10 5-10 5L2 7z"/><path d="m2 17 10 5 10-5"/><path d="m2 12 10 5 10-5"/>"#),
    ("building", 20, r#"<path d="M3 22h18"/><path d="M6 22V8l6-5 6 5v14"/><rect x="9" y="13" width="6" height="9"/>"#),
    (
        "calendar",
        20,
        r#"<rect x="3" y="4" width="18" height="18" rx="2"/><path d="M16 2v4"/><path d="M8 2v4"/><path d="M3 10h18"/>"#,
    ),
    ("briefcase", 20, r#"<rect x="2" y="7" width="20" height="14" rx="2"/><path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>"#),
    (
        "users",
        20,
        r#"<path d="M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M23 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#,
    ),
    ("user", 20, r#"<path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#),
    (
        "settings",
        20,
        r#"<circle cx="12" cy="12" r="3"/><path d="M12 1v3M12 20v3M4.2 4.2l2.1 2.1M17.7 17.7l2.1 2.1M1 12h3M20 12h3M4.2 19.8l2.1-2.1M17.7 6.3l2.1-2.1"/>"#,
    ),
];

/// Shown for names missing from the table.
const FALLBACK: (u8, &str) = (20, r#"<circle cx="12" cy="12" r="10"/><path d="M12 8v4l3 3"/>"#);

fn glyph(name: &str) -> (u8, &'static str) {
    GLYPHS
        .iter()
        .find(|(n, _, _)| *n == name)
        .map(|(_, size, body)| (*size, *body))
        .unwrap_or(FALLBACK)
}

pub fn icon(name: &str) -> AnyView {
    let (size, body) = glyph(name);
    let size = size.to_string();
    view! {
        <svg
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=body
        ></svg>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_icon_falls_back() {
        assert_eq!(glyph("no-such-icon"), FALLBACK);
        assert_eq!(glyph("plus").0, 16);
    }

    #[test]
    fn test_glyph_names_unique() {
        let mut names: Vec<&str> = GLYPHS.iter().map(|(n, _, _)| *n).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
