use strum_macros::{Display, EnumString};

/// The two reachable views of the app, addressed by location hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum Route {
    #[default]
    #[strum(serialize = "#/")]
    Submission,
    #[strum(serialize = "#/result")]
    Result,
}

impl Route {
    /// Maps a location hash to a route. Unknown hashes land on the submission view.
    pub fn from_hash(hash: &str) -> Self {
        let hash = hash.trim_end_matches('/');
        if hash.is_empty() || hash == "#" {
            return Route::Submission;
        }
        hash.parse().unwrap_or_default()
    }

    pub fn hash(self) -> String {
        self.to_string()
    }
}
