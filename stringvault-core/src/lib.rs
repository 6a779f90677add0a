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

//! Stringvault Core
//!
//! Fundamental data structures: analyzed string records, the shared filter
//! specification, and the error taxonomy.

pub mod analysis;
pub mod error;
pub mod filter;
pub mod record;

pub use analysis::{analyze, character_frequencies, fingerprint, is_palindrome, word_count};
pub use error::{Result, StringVaultError};
pub use filter::FilterSpec;
pub use record::{StringProperties, StringRecord};
