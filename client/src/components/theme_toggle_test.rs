#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn glyph_points_at_the_other_theme() {
    assert_eq!(toggle_glyph(Theme::Light), "☾");
    assert_eq!(toggle_glyph(Theme::Dark), "☀");
}

#[test]
fn browser_theme_falls_back_to_light_without_storage() {
    assert_eq!(browser_theme().get_initial(), Theme::Light);
}
