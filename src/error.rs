// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

/// Failures of the raw key-value backend.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,

    #[error("storage backend failure: {0}")]
    Backend(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::Backend(e.to_string())
    }
}

/// Failures the expense store swallows and reports through `last_error`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("stored expense data is malformed: {0}")]
    Malformed(String),

    #[error("could not serialize expenses: {0}")]
    Serialize(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid amount")]
    InvalidAmount,

    #[error("Description is required")]
    EmptyDescription,

    #[error("Date is required")]
    MissingDate,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Date {0} is in the future")]
    FutureDate(String),

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Invalid sort order '{0}' (use asc|desc)")]
    InvalidSortOrder(String),
}
