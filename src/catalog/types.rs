use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A movie as listed by the catalog.
///
/// Only the fields the UI shows are decoded; everything else in the
/// catalog's record is ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl Movie {
    /// Year part of `release_date` ("2008-07-16" -> 2008).
    /// Returns None when the date is missing or not a calendar date.
    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }

    /// Rating with one decimal, or "N/A".
    pub fn rating_label(&self) -> String {
        match self.vote_average {
            Some(v) if v > 0.0 => format!("{v:.1}"),
            _ => "N/A".to_string(),
        }
    }

    /// Full poster URL under the given image base.
    pub fn poster_url(&self, image_base_url: &str) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| format!("{}{}", image_base_url.trim_end_matches('/'), p))
    }
}

/// Body of a listing response (search or discover).
///
/// Besides `results`, the body may carry an application-level failure in one
/// of two shapes: `{"response": "error", "Error": "..."}` or TMDB's own
/// `{"success": false, "status_message": "..."}`.
#[derive(Deserialize, Debug, Default)]
pub(crate) struct MoviePage {
    #[serde(default)]
    pub results: Option<Vec<Movie>>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default, rename = "Error")]
    pub error: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub status_message: Option<String>,
}

impl MoviePage {
    /// `Some(message)` if the body signals a failure; the inner message is
    /// whatever text the body provided.
    pub fn rejection(&self) -> Option<Option<String>> {
        if self.response.as_deref() == Some("error") {
            return Some(self.error.clone());
        }
        if self.success == Some(false) {
            return Some(self.status_message.clone());
        }
        None
    }

    pub fn into_movies(self) -> Vec<Movie> {
        self.results.unwrap_or_default()
    }
}
