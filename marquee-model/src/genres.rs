use std::fmt;

/// The fixed TMDB movie genre list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum MovieGenre {
    Action,
    Adventure,
    Animation,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Family,
    Fantasy,
    History,
    Horror,
    Music,
    Mystery,
    Romance,
    ScienceFiction,
    TvMovie,
    Thriller,
    War,
    Western,
}

impl MovieGenre {
    /// Every genre in catalog order.
    pub fn all() -> &'static [MovieGenre] {
        use MovieGenre::*;
        &[
            Action,
            Adventure,
            Animation,
            Comedy,
            Crime,
            Documentary,
            Drama,
            Family,
            Fantasy,
            History,
            Horror,
            Music,
            Mystery,
            Romance,
            ScienceFiction,
            TvMovie,
            Thriller,
            War,
            Western,
        ]
    }

    /// Remote genre identifier as it appears in `genre_ids`.
    pub fn id(&self) -> u32 {
        match self {
            MovieGenre::Action => 28,
            MovieGenre::Adventure => 12,
            MovieGenre::Animation => 16,
            MovieGenre::Comedy => 35,
            MovieGenre::Crime => 80,
            MovieGenre::Documentary => 99,
            MovieGenre::Drama => 18,
            MovieGenre::Family => 10751,
            MovieGenre::Fantasy => 14,
            MovieGenre::History => 36,
            MovieGenre::Horror => 27,
            MovieGenre::Music => 10402,
            MovieGenre::Mystery => 9648,
            MovieGenre::Romance => 10749,
            MovieGenre::ScienceFiction => 878,
            MovieGenre::TvMovie => 10770,
            MovieGenre::Thriller => 53,
            MovieGenre::War => 10752,
            MovieGenre::Western => 37,
        }
    }

    /// Name as the API spells it.
    pub fn api_name(&self) -> &'static str {
        match self {
            MovieGenre::Action => "Action",
            MovieGenre::Adventure => "Adventure",
            MovieGenre::Animation => "Animation",
            MovieGenre::Comedy => "Comedy",
            MovieGenre::Crime => "Crime",
            MovieGenre::Documentary => "Documentary",
            MovieGenre::Drama => "Drama",
            MovieGenre::Family => "Family",
            MovieGenre::Fantasy => "Fantasy",
            MovieGenre::History => "History",
            MovieGenre::Horror => "Horror",
            MovieGenre::Music => "Music",
            MovieGenre::Mystery => "Mystery",
            MovieGenre::Romance => "Romance",
            MovieGenre::ScienceFiction => "Science Fiction",
            MovieGenre::TvMovie => "TV Movie",
            MovieGenre::Thriller => "Thriller",
            MovieGenre::War => "War",
            MovieGenre::Western => "Western",
        }
    }

    /// Genre for a remote id, if it is one of ours.
    pub fn from_id(id: u32) -> Option<MovieGenre> {
        Self::all().iter().copied().find(|genre| genre.id() == id)
    }

    /// Case-insensitive lookup by display name; spaces and dashes are ignored.
    pub fn from_name(name: &str) -> Option<MovieGenre> {
        let wanted = normalize(name);
        Self::all()
            .iter()
            .copied()
            .find(|genre| normalize(genre.api_name()) == wanted)
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for MovieGenre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}
