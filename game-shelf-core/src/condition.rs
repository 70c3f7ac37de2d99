//! Collector-grade rendering.

/// Render a 1-5 condition grade as a five-glyph star scale.
///
/// `Some(3)` renders as `"★★★☆☆"`; `None` (ungraded) renders as an empty
/// string. Grades above 5 are clamped.
pub fn condition_stars(condition: Option<u32>) -> String {
    match condition {
        None => String::new(),
        Some(grade) => {
            let filled = grade.min(5) as usize;
            let mut stars = String::with_capacity(5 * '★'.len_utf8());
            for _ in 0..filled {
                stars.push('★');
            }
            for _ in filled..5 {
                stars.push('☆');
            }
            stars
        }
    }
}
