// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The expense record store.
//!
//! The whole collection lives as one JSON array under a single key. Every
//! mutation reads the array, changes it, and writes it back in full.
//! Storage failures never reach the caller: reads degrade to an empty list,
//! writes are dropped, and the swallowed failure is kept for `last_error`.

use std::cell::{Cell, RefCell};

use chrono::Utc;
use log::{debug, error, warn};
use uuid::Uuid;

use crate::error::{StorageError, StoreError};
use crate::models::{Expense, ExpenseInput};
use crate::storage::Storage;

pub const STORAGE_KEY: &str = "expense-tracker-data";

pub struct ExpenseStore {
    storage: Box<dyn Storage>,
    key: String,
    last_error: RefCell<Option<StoreError>>,
    reported_malformed: Cell<bool>,
}

impl ExpenseStore {
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    pub fn with_key(storage: impl Storage + 'static, key: impl Into<String>) -> Self {
        Self {
            storage: Box::new(storage),
            key: key.into(),
            last_error: RefCell::new(None),
            reported_malformed: Cell::new(false),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The failure swallowed by the most recent operation, if any.
    pub fn last_error(&self) -> Option<StoreError> {
        self.last_error.borrow().clone()
    }

    /// Reads the slot without degrading. A missing key is an empty collection.
    pub fn try_load(&self) -> Result<Vec<Expense>, StoreError> {
        match self.storage.get(&self.key)? {
            None => Ok(Vec::new()),
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| StoreError::Malformed(e.to_string()))
            }
        }
    }

    /// Serializes and writes the full collection.
    pub fn try_save(&self, expenses: &[Expense]) -> Result<(), StoreError> {
        let raw =
            serde_json::to_string(expenses).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.storage.set(&self.key, &raw)?;
        Ok(())
    }

    pub fn list(&self) -> Vec<Expense> {
        self.begin();
        self.load_or_empty()
    }

    /// Appends a new expense. The caller is expected to have validated `input`.
    pub fn create(&self, input: ExpenseInput) -> Expense {
        self.begin();
        let mut expenses = self.load_or_empty();

        let mut id = Uuid::new_v4().to_string();
        while expenses.iter().any(|e| e.id == id) {
            id = Uuid::new_v4().to_string();
        }
        let expense = Expense {
            id,
            amount: input.amount,
            category: input.category,
            description: input.description.trim().to_string(),
            occurred_on: input.occurred_on,
            created_at: Utc::now(),
        };
        expenses.push(expense.clone());
        self.persist(&expenses);
        debug!("created expense {} ({} total)", expense.id, expenses.len());
        expense
    }

    /// Replaces every mutable field of the expense with `id`.
    /// Returns `None` and writes nothing when no such expense exists.
    pub fn update(&self, id: &str, input: ExpenseInput) -> Option<Expense> {
        self.begin();
        let mut expenses = self.load_or_empty();
        let slot = expenses.iter_mut().find(|e| e.id == id)?;

        slot.amount = input.amount;
        slot.category = input.category;
        slot.description = input.description.trim().to_string();
        slot.occurred_on = input.occurred_on;
        let updated = slot.clone();

        self.persist(&expenses);
        debug!("updated expense {}", id);
        Some(updated)
    }

    pub fn delete(&self, id: &str) -> bool {
        self.begin();
        let mut expenses = self.load_or_empty();
        let before = expenses.len();
        expenses.retain(|e| e.id != id);
        if expenses.len() == before {
            return false;
        }
        self.persist(&expenses);
        debug!("deleted expense {}", id);
        true
    }

    /// Removes the whole collection from durable storage.
    pub fn clear(&self) {
        self.begin();
        if let Err(e) = self.storage.remove(&self.key) {
            self.swallow_write_failure(e.into());
        }
    }

    fn begin(&self) {
        self.last_error.replace(None);
    }

    fn record(&self, e: StoreError) {
        self.last_error.replace(Some(e));
    }

    fn load_or_empty(&self) -> Vec<Expense> {
        match self.try_load() {
            Ok(expenses) => expenses,
            Err(e) => {
                match &e {
                    StoreError::Storage(StorageError::Unavailable) => {
                        debug!("storage unavailable, treating '{}' as empty", self.key)
                    }
                    StoreError::Malformed(msg) if !self.reported_malformed.get() => {
                        self.reported_malformed.set(true);
                        error!("error reading '{}': {}", self.key, msg);
                    }
                    StoreError::Malformed(msg) => debug!("'{}' still malformed: {}", self.key, msg),
                    other => warn!("error reading '{}': {}", self.key, other),
                }
                self.record(e);
                Vec::new()
            }
        }
    }

    fn persist(&self, expenses: &[Expense]) {
        if let Err(e) = self.try_save(expenses) {
            self.swallow_write_failure(e);
        }
    }

    fn swallow_write_failure(&self, e: StoreError) {
        if e == StoreError::Storage(StorageError::Unavailable) {
            debug!("storage unavailable, dropping write to '{}'", self.key);
        } else {
            warn!("error writing '{}': {}", self.key, e);
        }
        self.record(e);
    }
}
