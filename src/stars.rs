/// Number of indicators shown for any rating.
pub const STAR_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Filled,
    Empty,
}

/// Indicator `i` is filled iff `i < floor(rating)`, so 4.7 shows four stars.
///
/// Fill and color follow the same rule; there is no partial star.
pub fn render_stars(rating: f64) -> [Star; STAR_COUNT] {
    let whole = if rating.is_finite() { rating.floor() } else { 0.0 };
    std::array::from_fn(|i| {
        if (i as f64) < whole {
            Star::Filled
        } else {
            Star::Empty
        }
    })
}
