use super::*;

#[test]
fn bundled_content_parses() {
    let content = SiteContent::bundled().expect("bundled content should parse");
    assert!(!content.profile.name.is_empty());
    assert_eq!(content.projects.len(), 3);
    assert!(content.contacts.email.starts_with("mailto:"));
    assert!(content.contacts.whatsapp.starts_with("https://"));
}

#[test]
fn project_ids_are_unique() {
    let content = SiteContent::load();
    let mut ids = content.projects.iter().map(|p| p.id).collect::<Vec<_>>();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), content.projects.len());
}

#[test]
fn optional_sections_default_when_absent() {
    let raw = r#"{
        "profile": { "name": "A", "title": "B", "location": "C", "bio": "D", "avatar": "a.png" },
        "contacts": { "whatsapp": "w", "facebook": "f", "linkedin": "l", "email": "e" }
    }"#;
    let content = SiteContent::from_json(raw).expect("minimal content should parse");
    assert!(content.projects.is_empty());
    assert!(content.skills.is_empty());
    assert_eq!(content.profile.availability, "");
}

#[test]
fn malformed_content_is_reported() {
    let err = SiteContent::from_json("{\"profile\": 3}").expect_err("should fail");
    assert!(err.to_string().starts_with("invalid site content"));
}

#[test]
fn copyright_notice_names_owner_and_year() {
    let content = SiteContent::bundled().expect("bundled content should parse");
    let notice = content.copyright_notice(2031);
    assert!(notice.starts_with("© 2031 "));
    assert!(notice.contains(&content.profile.name));
}

#[test]
fn copyright_year_follows_the_clock() {
    use chrono::{Datelike, Utc};

    assert_eq!(current_year(), Utc::now().year());
    let content = SiteContent::load();
    assert!(content.copyright_notice(current_year()).contains(&Utc::now().year().to_string()));
}

#[test]
fn pinned_year_in_content_is_ignored() {
    let raw = r#"{
        "profile": { "name": "A", "title": "B", "location": "C", "bio": "D", "avatar": "a.png" },
        "contacts": { "whatsapp": "w", "facebook": "f", "linkedin": "l", "email": "e" },
        "copyright_year": 2025
    }"#;
    let content = SiteContent::from_json(raw).expect("extra keys should be tolerated");
    assert_eq!(content.copyright_notice(2040), "© 2040 A. All rights reserved.");
}
