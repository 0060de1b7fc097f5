//! Read-only client for the Open Library catalog API.
//!
//! [`CatalogClient::python_books`] lists the works of the `python` subject and
//! fetches the details of every work, one after another.

use serde::{Deserialize, Serialize};

mod books;
mod client;

pub use client::{CatalogClient, CatalogError};

/// Subject whose works are listed.
pub const SUBJECT: &str = "python";

/// Upper bound on the number of works requested from the subject listing.
pub const SUBJECT_LIMIT: u32 = 20;

/// Used when a work record carries no description.
pub const NO_DESCRIPTION: &str = "No description available";

/// Response of `GET /subjects/{subject}`.
#[derive(Debug, Deserialize)]
pub struct SubjectListing {
    pub work_count: u64,
    pub works: Vec<BookSummary>,
}

/// One entry of [`SubjectListing::works`].
#[derive(Debug, Clone, Deserialize)]
pub struct BookSummary {
    pub title: String,
    /// Path of the work record, e.g. `/works/OL123W`.
    pub key: String,
}

/// Response of `GET {key}`. Only the description is of interest.
#[derive(Debug, Default, Deserialize)]
pub struct WorkRecord {
    #[serde(default)]
    pub description: Option<Description>,
}

/// Open Library serves descriptions either as a plain string or as a typed text value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Typed { value: String },
}

impl Description {
    pub fn into_text(self) -> String {
        match self {
            Description::Text(text) => text,
            Description::Typed { value } => value,
        }
    }
}

impl WorkRecord {
    /// The description text, or [`NO_DESCRIPTION`] if the record has none.
    pub fn description_or_default(self) -> String {
        self.description
            .map(Description::into_text)
            .unwrap_or_else(|| NO_DESCRIPTION.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetail {
    pub title: String,
    pub description: String,
}
