//! Filter and sort selections as chosen by the user.
//!
//! Control values arrive as strings (`"all"`, a genre id or name, a year, a
//! sort key) and are normalized here so the sorting/filtering engine only
//! sees typed selections.

use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};
use crate::genres::MovieGenre;

const ALL: &str = "all";

/// Genre control: everything, or items tagged with one genre id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GenreFilter {
    /// No genre restriction.
    #[default]
    All,
    /// Items whose `genre_ids` contain this id.
    Genre(u32),
}

impl GenreFilter {
    /// Whether an item with `genre_ids` passes.
    pub fn matches(&self, genre_ids: &[u32]) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Genre(id) => genre_ids.contains(id),
        }
    }
}

impl FromStr for GenreFilter {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
            return Ok(GenreFilter::All);
        }
        if let Ok(id) = trimmed.parse::<u32>() {
            return Ok(GenreFilter::Genre(id));
        }
        MovieGenre::from_name(trimmed)
            .map(|genre| GenreFilter::Genre(genre.id()))
            .ok_or_else(|| ModelError::InvalidGenre(trimmed.to_string()))
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenreFilter::All => f.write_str(ALL),
            GenreFilter::Genre(id) => match MovieGenre::from_id(*id) {
                Some(genre) => write!(f, "{genre}"),
                None => write!(f, "{id}"),
            },
        }
    }
}

/// Release year control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum YearFilter {
    /// No year restriction.
    #[default]
    All,
    /// Four-digit year compared against the release date prefix.
    Year(String),
}

impl YearFilter {
    /// Whether an item released in `release_year` passes.
    pub fn matches(&self, release_year: Option<&str>) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Year(year) => release_year == Some(year.as_str()),
        }
    }
}

impl FromStr for YearFilter {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
            return Ok(YearFilter::All);
        }
        if trimmed.len() == 4 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            Ok(YearFilter::Year(trimmed.to_string()))
        } else {
            Err(ModelError::InvalidYear(trimmed.to_string()))
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::All => f.write_str(ALL),
            YearFilter::Year(year) => f.write_str(year),
        }
    }
}

/// Exactly one sort key is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortBy {
    /// Remote popularity, highest first.
    #[default]
    Popularity,
    /// Vote average, highest first.
    Rating,
    /// Release date, newest first.
    Year,
    /// Title, alphabetical.
    Title,
}

impl SortBy {
    /// Every sort key, default first.
    pub fn all() -> &'static [SortBy] {
        &[SortBy::Popularity, SortBy::Rating, SortBy::Year, SortBy::Title]
    }

    /// Any unrecognized control value falls back to popularity.
    pub fn from_control(value: &str) -> SortBy {
        match value.trim().to_ascii_lowercase().as_str() {
            "rating" => SortBy::Rating,
            "year" => SortBy::Year,
            "title" => SortBy::Title,
            _ => SortBy::Popularity,
        }
    }

    /// Control value for this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Popularity => "popularity",
            SortBy::Rating => "rating",
            SortBy::Year => "year",
            SortBy::Title => "title",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full filter/sort selection mirrored from the UI controls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FilterSelection {
    /// Genre restriction.
    pub genre: GenreFilter,
    /// Year restriction.
    pub year: YearFilter,
    /// Active ordering.
    pub sort: SortBy,
}

impl FilterSelection {
    /// Selection from already typed parts.
    pub fn new(genre: GenreFilter, year: YearFilter, sort: SortBy) -> Self {
        Self { genre, year, sort }
    }

    /// Build a selection from raw control values.
    pub fn from_controls(genre: &str, year: &str, sort: &str) -> Result<Self> {
        Ok(Self {
            genre: genre.parse()?,
            year: year.parse()?,
            sort: SortBy::from_control(sort),
        })
    }

    /// `all / all / popularity`.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "genre={} year={} sort={}", self.genre, self.year, self.sort)
    }
}
