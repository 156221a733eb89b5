//! Catalog records as returned by the metadata API.
//!
//! Optional fields are kept optional all the way to the renderer; the
//! fallbacks in [`crate::display`] decide what a missing value looks like.

/// Remote-assigned movie identifier.
pub type ItemId = u64;

/// One movie entry from a listing (search or discovery) response.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Remote identifier, unique within the catalog.
    pub id: ItemId,
    /// Display title.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "de::null_as_default"))]
    pub title: String,
    /// `YYYY-MM-DD`; an empty string from the API is treated as absent.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "de::empty_string_as_none")
    )]
    pub release_date: Option<String>,
    /// Path appended to the image host.
    #[cfg_attr(feature = "serde", serde(default))]
    pub poster_path: Option<String>,
    /// Remote popularity score; 0 when absent.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "de::null_as_default"))]
    pub popularity: f64,
    /// Average vote, 0 to 10.
    #[cfg_attr(feature = "serde", serde(default))]
    pub vote_average: Option<f32>,
    /// Genre ids, see [`crate::MovieGenre`].
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "de::null_as_default"))]
    pub genre_ids: Vec<u32>,
    /// Plot summary.
    #[cfg_attr(feature = "serde", serde(default))]
    pub overview: Option<String>,
}

impl Item {
    /// The four-character year prefix of the release date, if any.
    pub fn release_year(&self) -> Option<&str> {
        release_year(self.release_date.as_deref())
    }

    /// Whether the item is tagged with `genre_id`.
    pub fn has_genre(&self, genre_id: u32) -> bool {
        self.genre_ids.contains(&genre_id)
    }
}

/// Genre entry as embedded in a detail record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenreInfo {
    /// Genre id.
    pub id: u32,
    /// Genre name as sent by the API.
    pub name: String,
}

/// Full record for a single movie.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDetail {
    /// Remote identifier.
    pub id: ItemId,
    /// Display title.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "de::null_as_default"))]
    pub title: String,
    /// `YYYY-MM-DD`, empty treated as absent.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "de::empty_string_as_none")
    )]
    pub release_date: Option<String>,
    /// Path appended to the image host.
    #[cfg_attr(feature = "serde", serde(default))]
    pub poster_path: Option<String>,
    /// Remote popularity score; 0 when absent.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "de::null_as_default"))]
    pub popularity: f64,
    /// Average vote, 0 to 10.
    #[cfg_attr(feature = "serde", serde(default))]
    pub vote_average: Option<f32>,
    /// Plot summary.
    #[cfg_attr(feature = "serde", serde(default))]
    pub overview: Option<String>,
    /// Minutes; only present on detail fetches.
    #[cfg_attr(feature = "serde", serde(default))]
    pub runtime: Option<u32>,
    /// Named genres.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "de::null_as_default"))]
    pub genres: Vec<GenreInfo>,
}

impl ItemDetail {
    /// The four-character year prefix of the release date, if any.
    pub fn release_year(&self) -> Option<&str> {
        release_year(self.release_date.as_deref())
    }

    /// Genre names in API order.
    pub fn genre_names(&self) -> impl Iterator<Item = &str> {
        self.genres.iter().map(|genre| genre.name.as_str())
    }
}

/// One page of listing results plus the pagination metadata the API reported.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogPage {
    /// Items in response order.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "de::null_as_default"))]
    pub results: Vec<Item>,
    /// 1-based page number.
    pub page: u32,
    /// Total pages for this query.
    pub total_pages: u32,
    /// Total matching items, when reported.
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_results: Option<u64>,
}

fn release_year(date: Option<&str>) -> Option<&str> {
    date.and_then(|date| date.get(..4))
}

#[cfg(feature = "serde")]
mod de {
    use serde::{Deserialize, Deserializer};

    pub(super) fn empty_string_as_none<'de, D>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.filter(|s| !s.trim().is_empty()))
    }

    /// An explicit `null` reads the same as a missing key.
    pub(super) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}
