// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key-value persistence capability used by the wellness store.

use crate::error::RealmeError;
use crate::traits::adapter::PluginAdapter;

/// String key-value persistence, namespaced per user by key prefix.
///
/// Writes are synchronous and best-effort; there are no transactions
/// spanning multiple keys.
pub trait KeyValueStore: PluginAdapter {
    /// Returns the stored value, or `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, RealmeError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), RealmeError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), RealmeError>;
}
