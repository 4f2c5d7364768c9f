//! Movie identification against an external metadata catalog.
//!
//! The catalog itself is not part of this crate. It is reached through two
//! collaborators:
//!
//! - [`MetadataSearch`]: title string in, candidate catalog ids out
//! - [`MetadataSource`]: catalog id in, a [`MovieRecord`] with named accessors out
//!
//! [`MovieLookup`] cleans a file name, asks the search collaborator for the
//! best candidate and reads the detail record into [`MovieDetails`].

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::normalize::{basename, normalize, NormalizeOptions};
use crate::Error;

/// Number of search results requested per lookup.
pub const MAX_RESULTS: usize = 1;

/// A search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCandidate {
    /// Catalog identifier.
    pub id: String,
    /// Title as listed in the catalog, when the provider returns it.
    pub title: Option<String>,
}

/// Searches the catalog by title.
pub trait MetadataSearch {
    /// Return at most `max_results` candidates, best first.
    fn search(&self, title: &str, max_results: usize) -> Result<Vec<SearchCandidate>, Error>;
}

/// A cast member credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
    pub role: Option<String>,
}

/// A picture reference: full size and thumbnail URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub url: String,
    pub thumbnail: Option<String>,
}

/// Structured metadata for one catalog entry.
pub trait MovieRecord {
    fn genres(&self) -> Vec<String>;
    fn photo(&self) -> Option<String>;
    fn thumb_photo(&self) -> Option<String>;
    fn main_pictures(&self) -> Vec<Picture>;
    fn main_url(&self) -> String;
    fn plot(&self) -> Vec<String>;
    fn plot_outline(&self) -> String;
    /// Runtime in minutes.
    fn runtime(&self) -> Option<u32>;
    fn tagline(&self) -> String;
    fn title(&self) -> String;
    fn votes(&self) -> Option<u64>;
    /// Release year, `None` when the catalog has none.
    fn year(&self) -> Option<u16>;
    fn cast(&self) -> Vec<CastMember>;
    fn rating(&self) -> Option<f32>;
    fn goofs(&self) -> Vec<String>;
    fn comment(&self) -> String;
}

/// Fetches detail records by catalog id.
pub trait MetadataSource {
    type Record: MovieRecord;

    fn fetch(&self, id: &str) -> Result<Self::Record, Error>;
}

/// Everything read from a matched record, plus how it was found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: String,
    pub cleaned_name: String,
    pub genres: Vec<String>,
    pub photo: Option<String>,
    pub thumb_photo: Option<String>,
    pub main_pictures: Vec<Picture>,
    pub main_url: String,
    pub plot: Vec<String>,
    pub plot_outline: String,
    pub runtime: Option<u32>,
    pub tagline: String,
    pub title: String,
    pub votes: Option<u64>,
    pub year: Option<u16>,
    pub cast: Vec<CastMember>,
    pub rating: Option<f32>,
    pub goofs: Vec<String>,
    pub comment: String,
}

impl MovieDetails {
    fn from_record<R: MovieRecord>(id: &str, cleaned_name: &str, record: &R) -> Self {
        Self {
            id: id.to_string(),
            cleaned_name: cleaned_name.to_string(),
            genres: record.genres(),
            photo: record.photo(),
            thumb_photo: record.thumb_photo(),
            main_pictures: record.main_pictures(),
            main_url: record.main_url(),
            plot: record.plot(),
            plot_outline: record.plot_outline(),
            runtime: record.runtime(),
            tagline: record.tagline(),
            title: record.title(),
            votes: record.votes(),
            year: record.year(),
            cast: record.cast(),
            rating: record.rating(),
            goofs: record.goofs(),
            comment: record.comment(),
        }
    }

    /// A record with neither a year nor any plot text is not a real match.
    pub fn is_usable(&self) -> bool {
        self.year.is_some() || self.plot.iter().any(|p| !p.trim().is_empty())
    }
}

/// Identifies movies from file names.
pub struct MovieLookup<S, D> {
    search: S,
    source: D,
    options: NormalizeOptions,
    cleaned_name: String,
    original_name: String,
}

impl<S: MetadataSearch, D: MetadataSource> MovieLookup<S, D> {
    pub fn new(search: S, source: D) -> Self {
        Self {
            search,
            source,
            options: NormalizeOptions::default(),
            cleaned_name: String::new(),
            original_name: String::new(),
        }
    }

    /// Use these options when cleaning names.
    pub fn with_options(mut self, options: NormalizeOptions) -> Self {
        self.options = options;
        self
    }

    /// The name sent to the search collaborator by the last [`MovieLookup::search`].
    ///
    /// Empty when the last search ran without clean-up.
    pub fn cleaned_name(&self) -> &str {
        &self.cleaned_name
    }

    /// Find the catalog id for a file name.
    ///
    /// With `clean_up` the final path segment is normalized first; otherwise it
    /// is searched verbatim.
    pub fn search(&mut self, file_name: &str, clean_up: bool) -> Result<String, Error> {
        let original = basename(file_name);
        self.original_name = original.to_string();
        self.cleaned_name.clear();

        let name = if clean_up {
            self.cleaned_name = normalize(original, &self.options);
            debug!(cleaned = %self.cleaned_name, original, "searching catalog");
            self.cleaned_name.clone()
        } else {
            original.to_string()
        };

        let results = self.search.search(&name, MAX_RESULTS)?;
        match results.into_iter().next() {
            Some(candidate) => Ok(candidate.id),
            None => {
                warn!(name = %name, original, "could not find movie page");
                Err(self.no_match(&name))
            }
        }
    }

    /// Read every accessor of the record behind `id`.
    pub fn fetch_details(&self, id: &str) -> Result<MovieDetails, Error> {
        let record = self.source.fetch(id)?;
        let details = MovieDetails::from_record(id, &self.cleaned_name, &record);

        if !details.is_usable() {
            warn!(id, title = %details.title, "match has no year and no plot");
            let name = if self.cleaned_name.is_empty() {
                &self.original_name
            } else {
                &self.cleaned_name
            };
            return Err(self.no_match(name));
        }

        Ok(details)
    }

    /// Search, then fetch the details of the first candidate.
    pub fn identify(&mut self, file_name: &str) -> Result<MovieDetails, Error> {
        let id = self.search(file_name, true)?;
        self.fetch_details(&id)
    }

    fn no_match(&self, cleaned: &str) -> Error {
        Error::NoConfidentMatch {
            cleaned: cleaned.to_string(),
            original: self.original_name.clone(),
        }
    }
}
