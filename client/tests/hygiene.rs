//! Hygiene — source rules for the page controller, checked at test time
//!
//! Production files under `src/` (sibling `*_test.rs` files excluded) are
//! scanned line by line. Each rule names a pattern, the files allowed to use
//! it, and why it is banned everywhere else. The allow lists only shrink.

use std::fs;
use std::path::{Path, PathBuf};

struct Rule {
    pattern: &'static str,
    /// Path suffixes (relative to `src/`) exempt from the rule.
    allowed_in: &'static [&'static str],
    reason: &'static str,
}

/// Error paths must degrade, never abort the page.
const NO_PANICS: &[Rule] = &[
    Rule { pattern: ".unwrap()", allowed_in: &[], reason: "propagate or fall back instead" },
    Rule { pattern: ".expect(", allowed_in: &[], reason: "propagate or fall back instead" },
    Rule { pattern: "panic!(", allowed_in: &[], reason: "a broken enhancement must not take the page down" },
    Rule { pattern: "unreachable!(", allowed_in: &[], reason: "model the case in the type instead" },
    Rule { pattern: "todo!(", allowed_in: &[], reason: "unfinished code paths panic in the browser" },
];

/// Errors are logged or handled, not dropped.
const NO_SILENT_LOSS: &[Rule] = &[
    Rule { pattern: "let _ =", allowed_in: &[], reason: "log the error or bind it to a named `_x`" },
    Rule { pattern: ".ok()", allowed_in: &[], reason: "match the error so it can be logged" },
    Rule { pattern: "#[allow(dead_code)]", allowed_in: &[], reason: "delete unused code" },
];

/// Browser side effects stay in their owning module so state logic remains
/// testable on the native target.
const CENTRALIZED_EFFECTS: &[Rule] = &[
    Rule { pattern: ".local_storage()", allowed_in: &["util/storage.rs"], reason: "go through BrowserStorage" },
    Rule { pattern: ".set_attribute(", allowed_in: &["util/dom.rs"], reason: "go through util::dom" },
    Rule { pattern: ".class_list()", allowed_in: &["util/dom.rs"], reason: "go through util::dom" },
    Rule { pattern: ".scroll_into_view", allowed_in: &["util/dom.rs"], reason: "go through util::dom" },
    Rule { pattern: "IntersectionObserver::new", allowed_in: &["util/viewport.rs"], reason: "go through viewport::select_strategy" },
];

fn production_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            production_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs")
            && !path.to_string_lossy().ends_with("_test.rs")
        {
            out.push(path);
        }
    }
}

/// `path:line` for every line breaking one of `rules`.
fn violations(rules: &[Rule]) -> Vec<String> {
    let mut files = Vec::new();
    production_files(Path::new("src"), &mut files);
    files.sort();

    let mut found = Vec::new();
    for path in &files {
        let Ok(source) = fs::read_to_string(path) else {
            continue;
        };
        let display = path.to_string_lossy().replace('\\', "/");
        for rule in rules {
            if rule.allowed_in.iter().any(|allowed| display.ends_with(allowed)) {
                continue;
            }
            for (idx, line) in source.lines().enumerate() {
                if line.contains(rule.pattern) {
                    found.push(format!("  {display}:{}: `{}` ({})", idx + 1, rule.pattern, rule.reason));
                }
            }
        }
    }
    found
}

fn assert_clean(group: &str, rules: &[Rule]) {
    let found = violations(rules);
    assert!(found.is_empty(), "{group} violated:\n{}", found.join("\n"));
}

#[test]
fn scanner_sees_the_crate() {
    let mut files = Vec::new();
    production_files(Path::new("src"), &mut files);
    assert!(
        files.iter().any(|p| p.ends_with("lib.rs")),
        "run from the client crate root; found {} files",
        files.len()
    );
}

#[test]
fn no_panics_in_production_code() {
    assert_clean("no-panic rules", NO_PANICS);
}

#[test]
fn no_silently_discarded_errors() {
    assert_clean("silent-loss rules", NO_SILENT_LOSS);
}

#[test]
fn browser_effects_are_centralized() {
    assert_clean("effect centralization", CENTRALIZED_EFFECTS);
}
