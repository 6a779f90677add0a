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

pub mod error;
pub mod health;
pub mod strings;

use std::sync::Arc;
use std::time::Instant;
use stringvault_query::StringVault;

pub use error::ApiError;
pub use health::health_check;
pub use strings::{
    create_string, delete_string, filter_by_natural_language, get_string, list_strings,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub vault: Arc<StringVault>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(vault: Arc<StringVault>) -> Self {
        Self {
            vault,
            started_at: Instant::now(),
        }
    }
}
