use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// External TMDB identifier. Immutable and unique per movie.
pub type MovieId = i64;

/// A movie record as delivered by the metadata service.
///
/// List endpoints fill only the summary fields; the detail endpoint adds
/// runtime, genres, money figures and companies. A Movie is never edited
/// locally, a newer fetch replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,

    #[serde(default)]
    pub title: String,

    /// Synopsis. The service sends `""` when unknown; that is read as absent.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub overview: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub poster_path: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub backdrop_path: Option<String>,

    /// Average rating on a 0-10 scale
    #[serde(default)]
    pub vote_average: f64,

    #[serde(default)]
    pub vote_count: i64,

    /// ISO date (`YYYY-MM-DD`)
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub release_date: Option<String>,

    /// Minutes
    #[serde(default)]
    pub runtime: Option<u32>,

    #[serde(default)]
    pub genres: Vec<Genre>,

    /// Only present on list endpoints
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genre_ids: Vec<i64>,

    #[serde(default)]
    pub budget: Option<i64>,

    #[serde(default)]
    pub revenue: Option<i64>,

    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionCompany {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

/// A credited actor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub character: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub profile_path: Option<String>,
}

/// A video attached to a movie (trailer, teaser, featurette, clip...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub video_type: String,
    #[serde(default)]
    pub site: String,
}

impl Video {
    /// Trailers and teasers are the only videos shown on the detail page
    pub fn is_trailer(&self) -> bool {
        matches!(self.video_type.as_str(), "Trailer" | "Teaser")
    }
}

impl Movie {
    /// Create a summary record with only identity and title set
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            overview: None,
            poster_path: None,
            backdrop_path: None,
            vote_average: 0.0,
            vote_count: 0,
            release_date: None,
            runtime: None,
            genres: Vec::new(),
            genre_ids: Vec::new(),
            budget: None,
            revenue: None,
            production_companies: Vec::new(),
            status: None,
            tagline: None,
        }
    }

    /// Parsed release date, if the service sent a valid ISO date
    pub fn release(&self) -> Option<NaiveDate> {
        self.release_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }

    pub fn release_year(&self) -> Option<i32> {
        self.release().map(|d| d.year())
    }

    /// Rating with one decimal, e.g. `7.3`
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.vote_average)
    }

    /// Runtime as `2h 16m`; `None` when unknown or zero
    pub fn runtime_label(&self) -> Option<String> {
        match self.runtime {
            None | Some(0) => None,
            Some(minutes) if minutes < 60 => Some(format!("{}m", minutes)),
            Some(minutes) => Some(format!("{}h {}m", minutes / 60, minutes % 60)),
        }
    }

    pub fn genre_names(&self) -> Vec<String> {
        self.genres.iter().map(|g| g.name.clone()).collect()
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.release_year() {
            Some(year) => write!(f, "{} ({})", self.title, year),
            None => write!(f, "{}", self.title),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
