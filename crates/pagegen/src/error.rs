// SPDX-FileCopyrightText: 2025 GoDigitalPro
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for page generation.

/// Result type for pagegen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Pagegen error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two content records claim the same slug
    #[error("duplicate slug '{slug}': used by both '{first}' and '{second}'")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },

    /// A content record file failed to parse
    #[error("invalid content record '{path}': {reason}")]
    InvalidRecord { path: String, reason: String },

    /// The site configuration failed to parse
    #[error("invalid site config '{path}': {reason}")]
    InvalidConfig { path: String, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
