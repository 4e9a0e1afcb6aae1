// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};

use super::warn_if_degraded;
use crate::store::ExpenseStore;

pub fn clear(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    if !sub.get_flag("yes") {
        bail!("Refusing to delete every expense without --yes");
    }
    store.clear();
    warn_if_degraded(store);
    println!("All expenses cleared");
    Ok(())
}
