// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod db;
pub mod error;
pub mod insights;
pub mod models;
pub mod query;
pub mod storage;
pub mod store;
pub mod utils;
pub mod commands;
