// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Squad size is outside the valid range.
    InvalidSquadSize {
        /// The rejected size value.
        size: u32,
    },
    /// Quality tier name is not recognized.
    UnknownQualityTier(String),
    /// Constraint relation keyword is not recognized.
    UnknownRelationKeyword(String),
    /// Position name has no known id.
    UnknownPosition {
        /// The position name as extracted from the UI.
        name: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSquadSize { size } => {
                write!(f, "Invalid squad size: {size}. Must be between 1 and 11")
            }
            Self::UnknownQualityTier(name) => write!(f, "Unknown quality tier: '{name}'"),
            Self::UnknownRelationKeyword(word) => {
                write!(f, "Unknown constraint relation keyword: '{word}'")
            }
            Self::UnknownPosition { name } => {
                write!(f, "Position '{name}' has no known position id")
            }
        }
    }
}

impl std::error::Error for DomainError {}
