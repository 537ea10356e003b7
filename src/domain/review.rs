//! Star ratings and the review draft of the detail screen

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while editing a review
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("Rating {0} is outside 0..={max}", max = StarRating::MAX)]
    RatingOutOfRange(u8),
    #[error("Review form is not open")]
    NotOpen,
}

/// A 0 to 5 star rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StarRating(u8);

impl StarRating {
    pub const MAX: u8 = 5;

    pub fn new(stars: u8) -> Result<Self, ReviewError> {
        if stars > Self::MAX {
            return Err(ReviewError::RatingOutOfRange(stars));
        }
        Ok(Self(stars))
    }

    pub fn stars(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for StarRating {
    type Error = ReviewError;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        Self::new(stars)
    }
}

impl From<StarRating> for u8 {
    fn from(rating: StarRating) -> Self {
        rating.0
    }
}

/// A submitted review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub rating: StarRating,
    pub comment: String,
}

/// State of the "Laisser un avis" form
///
/// Submitting resets the form. Closing only hides it and keeps the typed
/// rating and comment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewDraft {
    visible: bool,
    rating: StarRating,
    comment: String,
}

impl ReviewDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn rating(&self) -> StarRating {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Hides the form, keeping what was typed
    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn set_rating(&mut self, stars: u8) -> Result<(), ReviewError> {
        if !self.visible {
            return Err(ReviewError::NotOpen);
        }
        self.rating = StarRating::new(stars)?;
        Ok(())
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) -> Result<(), ReviewError> {
        if !self.visible {
            return Err(ReviewError::NotOpen);
        }
        self.comment = comment.into();
        Ok(())
    }

    /// Takes the review out of the form and resets it
    ///
    /// # Example
    /// ```rust
    /// use school_directory::domain::review::ReviewDraft;
    ///
    /// let mut draft = ReviewDraft::new();
    /// draft.open();
    /// draft.set_rating(4)?;
    /// draft.set_comment("Bonne ambiance")?;
    ///
    /// let review = draft.submit()?;
    /// assert_eq!(review.rating.stars(), 4);
    /// assert!(!draft.is_visible());
    /// assert_eq!(draft.comment(), "");
    /// # Ok::<(), school_directory::domain::review::ReviewError>(())
    /// ```
    pub fn submit(&mut self) -> Result<Review, ReviewError> {
        if !self.visible {
            return Err(ReviewError::NotOpen);
        }
        let draft = std::mem::take(self);
        Ok(Review {
            rating: draft.rating,
            comment: draft.comment,
        })
    }
}
