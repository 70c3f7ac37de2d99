use game_shelf_core::condition_stars;

#[test]
fn ungraded_renders_empty() {
    assert_eq!(condition_stars(None), "");
}

#[test]
fn grades_render_as_five_glyph_scale() {
    assert_eq!(condition_stars(Some(1)), "★☆☆☆☆");
    assert_eq!(condition_stars(Some(3)), "★★★☆☆");
    assert_eq!(condition_stars(Some(5)), "★★★★★");
}

#[test]
fn out_of_range_grades_clamp() {
    assert_eq!(condition_stars(Some(0)), "☆☆☆☆☆");
    assert_eq!(condition_stars(Some(9)), "★★★★★");
}
