// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Error taxonomy shared by every stringvault crate.
//!
//! All variants are recoverable outcomes that callers are expected to
//! inspect; none of them indicates a broken store.

use thiserror::Error;

/// Errors surfaced by the store, the filter pipeline and the query interpreter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StringVaultError {
    /// A required input field was absent
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// A field was present but had the wrong type
    #[error("Invalid type for field '{field}': expected {expected}")]
    TypeMismatch { field: String, expected: String },

    /// A record with the same fingerprint is already stored
    #[error("String already exists (id {id})")]
    Conflict { id: String },

    /// No record is stored for the given content
    #[error("String not found")]
    NotFound,

    /// A structured filter value could not be parsed into its type
    #[error("Invalid value for filter '{field}': {reason}")]
    InvalidFilterValue { field: String, reason: String },

    /// The natural-language interpreter recognized nothing in the query
    #[error("Unable to parse natural language query: {0}")]
    Unparseable(String),

    /// The query was understood but its constraints cannot all hold
    #[error("Query parsed but resulted in conflicting filters: {0}")]
    ConflictingFilters(String),
}

impl StringVaultError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    pub fn type_mismatch(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected: expected.into(),
        }
    }

    pub fn invalid_filter(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFilterValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StringVaultError>;
