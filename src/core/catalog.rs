//! Marketplace card data.
//!
//! Plain read-only records — the carousel engine treats all of them as
//! opaque, and the widgets only read display fields.  Where the cards come
//! from is a collaborator concern; the bundled sample catalog stands in
//! for the remote listing service.

use chrono::NaiveDate;

// ───────────────────────────────────────── card types ────────

/// A bookable farmhouse listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub name: String,
    pub locale: String,
    /// Nightly rate in whole rupees.
    pub nightly_rate: u32,
    /// Average guest rating, 0.0–5.0.
    pub rating: f32,
    pub beds: u8,
}

/// An AI-generated stay suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub headline: String,
    pub blurb: String,
}

/// A guest review excerpt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub guest: String,
    pub quote: String,
    /// Star count, 1–5.
    pub stars: u8,
    pub stayed: NaiveDate,
}

// ───────────────────────────────────────── sample data ───────

/// The bundled demo catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub listings: Vec<Listing>,
    pub reviews: Vec<Review>,
}

impl Catalog {
    /// Demo data shaped so every rail wraps at every window width.
    pub fn sample() -> Self {
        Self {
            listings: sample_listings(),
            reviews: sample_reviews(),
        }
    }
}

fn listing(name: &str, locale: &str, nightly_rate: u32, rating: f32, beds: u8) -> Listing {
    Listing {
        name: name.into(),
        locale: locale.into(),
        nightly_rate,
        rating,
        beds,
    }
}

fn sample_listings() -> Vec<Listing> {
    vec![
        listing("Mango Grove Villa", "Alibaug", 14_500, 4.8, 4),
        listing("Cedar Ridge Farmstay", "Coorg", 9_200, 4.6, 3),
        listing("Riverbend Homestead", "Wayanad", 11_800, 4.9, 5),
        listing("Sunflower Acres", "Nashik", 7_400, 4.3, 2),
        listing("Teak Hollow Retreat", "Sakleshpur", 12_600, 4.7, 4),
        listing("Paddy Moon Cottage", "Palakkad", 8_900, 4.5, 3),
    ]
}

fn review(guest: &str, quote: &str, stars: u8, stayed: (i32, u32, u32)) -> Review {
    Review {
        guest: guest.into(),
        quote: quote.into(),
        stars,
        // Dates are fixed sample values and always valid.
        stayed: NaiveDate::from_ymd_opt(stayed.0, stayed.1, stayed.2).unwrap_or_default(),
    }
}

fn sample_reviews() -> Vec<Review> {
    vec![
        review(
            "Priya S.",
            "Woke up to mist over the paddy fields. The hosts sent us home with pickles.",
            5,
            (2026, 1, 14),
        ),
        review(
            "Daniel K.",
            "Farm-to-table meant the tomatoes were still warm from the sun.",
            5,
            (2025, 11, 2),
        ),
        review(
            "Meera R.",
            "The kids spent all day with the goats and slept like logs.",
            4,
            (2026, 3, 21),
        ),
        review(
            "Tom H.",
            "Patchy wifi, which turned out to be exactly what we needed.",
            4,
            (2025, 12, 28),
        ),
        review(
            "Anjali V.",
            "Bullock-cart ride at dusk, filter coffee at dawn. Booked again already.",
            5,
            (2026, 2, 7),
        ),
        review(
            "Sofia L.",
            "The veranda hammock alone is worth the trip.",
            4,
            (2026, 4, 12),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_rails_are_long_enough_to_wrap_everywhere() {
        // The widest window shows four cards; wrapping needs more.
        let catalog = Catalog::sample();
        assert!(catalog.listings.len() > 4);
        assert!(catalog.reviews.len() > 4);
    }

    #[test]
    fn sample_dates_are_valid() {
        for review in Catalog::sample().reviews {
            assert_ne!(review.stayed, NaiveDate::default());
            assert!((1..=5).contains(&review.stars));
        }
    }
}
