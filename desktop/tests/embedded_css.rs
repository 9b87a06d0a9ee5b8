#![cfg(test)]
//! The desktop build embeds `ui/assets/theme/main.css`; a broken path or an
//! emptied file would only show up as unstyled windows at runtime.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty."
    );
}

#[test]
fn embedded_css_defines_palette_variables() {
    for token in ["--color-bg", "--color-surface", "--color-border", "--radius"] {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
