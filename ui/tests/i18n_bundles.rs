//! Fluent bundle lint: every locale defines exactly the fallback's message
//! IDs, no ID is defined twice, and every `t!("…")` in `src/` resolves.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const EN_US: &str = include_str!("../i18n/en-US/sentiscope_ui.ftl");
const LOCALES: &[(&str, &str)] = &[
    ("es-ES", include_str!("../i18n/es-ES/sentiscope_ui.ftl")),
    ("fr-FR", include_str!("../i18n/fr-FR/sentiscope_ui.ftl")),
];

/// Message IDs defined in a Fluent source, plus any defined more than once.
fn message_ids(src: &str) -> (BTreeSet<String>, Vec<String>) {
    let mut ids = BTreeSet::new();
    let mut dups = Vec::new();
    for line in src.lines() {
        if line.starts_with(char::is_whitespace) {
            continue;
        }
        let Some((left, _)) = line.split_once('=') else {
            continue;
        };
        let id = left.trim();
        let is_id = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if is_id && !id.starts_with('-') && !ids.insert(id.to_string()) {
            dups.push(id.to_string());
        }
    }
    (ids, dups)
}

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).expect("readable src dir").flatten() {
        let path = entry.path();
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

/// Literal first arguments of `t!("…")` calls. The macro name must start a
/// token, so `format!("…")` or `asset!("…")` are not picked up.
fn referenced_ids(src: &str) -> Vec<String> {
    src.match_indices("t!(\"")
        .filter(|(pos, _)| {
            src[..*pos]
                .chars()
                .next_back()
                .map_or(true, |c| !(c.is_alphanumeric() || c == '_'))
        })
        .filter_map(|(pos, needle)| {
            let rest = &src[pos + needle.len()..];
            rest.find('"').map(|end| rest[..end].to_string())
        })
        .collect()
}

#[test]
fn reference_scan_ignores_other_macros() {
    let src = r#"
        let css = asset!("/assets/styling/explorer.css");
        let msg = format!("{file}: {err}");
        let title = t!("upload-title");
        let count = crate::t!("selection-count", count = 2);
    "#;
    assert_eq!(referenced_ids(src), vec!["upload-title", "selection-count"]);
}

#[test]
fn fallback_has_no_duplicates() {
    let (ids, dups) = message_ids(EN_US);
    assert!(!ids.is_empty(), "en-US bundle parsed to zero messages");
    assert!(dups.is_empty(), "duplicate IDs in en-US: {dups:?}");
}

#[test]
fn locales_match_fallback() {
    let (fallback, _) = message_ids(EN_US);
    let mut report = Vec::new();
    for (locale, src) in LOCALES {
        let (ids, dups) = message_ids(src);
        let missing: Vec<_> = fallback.difference(&ids).cloned().collect();
        let extra: Vec<_> = ids.difference(&fallback).cloned().collect();
        if !missing.is_empty() || !extra.is_empty() || !dups.is_empty() {
            report.push(format!(
                "{locale}: missing {missing:?}, extra {extra:?}, duplicated {dups:?}"
            ));
        }
    }
    assert!(report.is_empty(), "locale drift:\n{}", report.join("\n"));
}

#[test]
fn every_referenced_id_exists() {
    let (fallback, _) = message_ids(EN_US);
    let mut files = Vec::new();
    rust_sources(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut files);

    let mut unknown = BTreeSet::new();
    let mut used = BTreeSet::new();
    for file in files {
        let content = fs::read_to_string(&file).unwrap_or_default();
        for id in referenced_ids(&content) {
            if !fallback.contains(&id) {
                unknown.insert(format!("{id} ({})", file.display()));
            }
            used.insert(id);
        }
    }

    assert!(unknown.is_empty(), "t! IDs missing from en-US: {unknown:?}");
    assert!(used.contains("legend-positive") && used.contains("mode-subjectivity"));
}
