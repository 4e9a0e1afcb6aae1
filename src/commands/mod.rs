// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod expenses;
pub mod reports;
pub mod exporter;
pub mod importer;
pub mod maintenance;

use anyhow::{Context, Result};

use crate::store::ExpenseStore;

pub(crate) fn required<'a>(sub: &'a clap::ArgMatches, name: &str) -> Result<&'a String> {
    sub.get_one::<String>(name)
        .with_context(|| format!("--{} is required", name))
}

/// The store never fails its callers; tell the user when it had to degrade.
pub(crate) fn warn_if_degraded(store: &ExpenseStore) {
    if let Some(e) = store.last_error() {
        log::warn!("{}", e);
    }
}
