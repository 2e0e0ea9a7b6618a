//! Aggregate statistics over a subset of games.

use std::collections::HashSet;

use crate::types::{Game, same_category};

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Summary numbers shown by several views.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CatalogStats {
    pub total_games: usize,
    pub total_reviews: u64,
    /// Mean rating rounded to one decimal; 0.0 for an empty subset.
    pub average_rating: f64,
    /// Distinct categories, compared case-insensitively.
    pub category_count: usize,
}

impl CatalogStats {
    pub fn from_games<'a, I>(games: I) -> Self
    where
        I: IntoIterator<Item = &'a Game>,
    {
        let mut stats = Self::default();
        let mut rating_sum = 0.0;
        let mut categories = HashSet::new();

        for game in games {
            stats.total_games += 1;
            stats.total_reviews += u64::from(game.reviews);
            rating_sum += game.rating;
            categories.insert(game.category.to_lowercase());
        }

        stats.category_count = categories.len();
        if stats.total_games > 0 {
            stats.average_rating = round1(rating_sum / stats.total_games as f64);
        }
        stats
    }
}

/// One category's share of a game subset.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    /// Category name as spelled by the first game seen in it.
    pub category: String,
    pub count: usize,
    /// `count / total * 100`, rounded to one decimal.
    pub percentage: f64,
}

/// Per-category breakdown of `games`, largest share first.
///
/// Categories with equal counts keep the order in which they first appear.
/// An empty subset yields an empty list.
pub fn category_breakdown<'a, I>(games: I) -> Vec<CategoryShare>
where
    I: IntoIterator<Item = &'a Game>,
{
    let mut shares: Vec<CategoryShare> = Vec::new();
    let mut total = 0usize;

    for game in games {
        total += 1;
        match shares
            .iter_mut()
            .find(|s| same_category(&s.category, &game.category))
        {
            Some(share) => share.count += 1,
            None => shares.push(CategoryShare {
                category: game.category.clone(),
                count: 1,
                percentage: 0.0,
            }),
        }
    }

    if total == 0 {
        return shares;
    }
    for share in &mut shares {
        share.percentage = round1(share.count as f64 / total as f64 * 100.0);
    }
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(4.25), 4.3);
        assert_eq!(round1(4.24), 4.2);
        assert_eq!(round1(0.0), 0.0);
        assert_eq!(round1(33.333), 33.3);
    }
}
