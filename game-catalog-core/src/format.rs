/// Format a price for display: `"Free"` for zero, otherwise `"$19.99"`.
pub fn format_price(price: f64) -> String {
    if price <= 0.0 {
        "Free".to_string()
    } else {
        format!("${:.2}", price)
    }
}

/// Format a rating with one decimal (e.g., `4.5`).
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

/// Compact review count: `950`, `1.2K`, `3.4M`.
pub fn format_review_count(reviews: u64) -> String {
    if reviews >= 1_000_000 {
        format!("{:.1}M", reviews as f64 / 1_000_000.0)
    } else if reviews >= 1_000 {
        format!("{:.1}K", reviews as f64 / 1_000.0)
    } else {
        reviews.to_string()
    }
}

/// Star breakdown for a 0-5 rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

/// Split a rating into full, half and empty stars out of five.
///
/// A fractional part of 0.5 or more shows a half star.
pub fn star_rating(rating: f64) -> StarRating {
    let clamped = rating.clamp(0.0, 5.0);
    let full = clamped.floor() as u8;
    let half = full < 5 && clamped - f64::from(full) >= 0.5;
    let empty = 5 - full - u8::from(half);
    StarRating { full, half, empty }
}

impl std::fmt::Display for StarRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for _ in 0..self.full {
            write!(f, "★")?;
        }
        if self.half {
            write!(f, "½")?;
        }
        for _ in 0..self.empty {
            write!(f, "☆")?;
        }
        Ok(())
    }
}
