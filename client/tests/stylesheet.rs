//! Stylesheet contract — server-rendered content must stay readable
//!
//! Reveal blocks may only start hidden on a page the client has marked as
//! hydrated. A rule that hides them unconditionally would leave every section
//! invisible when the WASM bundle fails to load or scripts are disabled.

use std::fs;

use client::util::dom::{REVEALED_CLASS, SCRIPTED_CLASS};

struct Rule {
    selectors: Vec<String>,
    body: String,
}

fn strip_comments(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut rest = css;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        rest = match rest[start..].find("*/") {
            Some(end) => &rest[start + end + 2..],
            None => "",
        };
    }
    out.push_str(rest);
    out
}

/// Innermost rules of the stylesheet; `@media` wrappers are flattened away.
fn rules() -> Vec<Rule> {
    let raw = fs::read_to_string("style/portfolio.css").unwrap_or_default();
    strip_comments(&raw)
        .split('}')
        .filter_map(|chunk| {
            let (head, body) = chunk.rsplit_once('{')?;
            let selector = head.rsplit('{').next().unwrap_or(head);
            Some(Rule {
                selectors: selector
                    .split(',')
                    .map(|s| s.split_whitespace().collect::<Vec<_>>().join(" "))
                    .filter(|s| !s.is_empty())
                    .collect(),
                body: body.to_owned(),
            })
        })
        .collect()
}

fn hides(rule: &Rule) -> bool {
    rule.body
        .split(';')
        .any(|decl| decl.split_whitespace().collect::<String>() == "opacity:0")
}

#[test]
fn stylesheet_is_present() {
    assert!(!rules().is_empty(), "style/portfolio.css missing or empty");
}

#[test]
fn hidden_reveal_state_requires_scripted_marker() {
    let marker = format!(".{SCRIPTED_CLASS} ");
    let hiding = rules().into_iter().filter(hides).collect::<Vec<_>>();
    assert!(!hiding.is_empty(), "no rule hides reveal blocks before they scroll in");
    for rule in &hiding {
        for selector in &rule.selectors {
            assert!(
                selector.starts_with(&marker),
                "`{selector}` hides content without the `{SCRIPTED_CLASS}` marker"
            );
        }
    }
}

#[test]
fn revealed_state_is_styled_under_the_same_marker() {
    let expected = format!(".{SCRIPTED_CLASS} .reveal.{REVEALED_CLASS}");
    assert!(
        rules().iter().any(|rule| rule.selectors.iter().any(|s| *s == expected)),
        "missing `{expected}` rule"
    );
}

#[test]
fn hydrate_entry_marks_page_before_hydrating() {
    let lib = fs::read_to_string("src/lib.rs").unwrap_or_default();
    let marked = lib.find("dom::mark_scripted()");
    let hydrated = lib.find("hydrate_body(");
    assert!(marked.is_some(), "hydrate() never applies the scripted marker");
    assert!(marked < hydrated, "scripted marker must be applied before hydration");
}
