// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key-value persistence for Realme.
//!
//! Provides an in-memory store for tests and ephemeral sessions, and a
//! SQLite store with embedded migrations for the CLI.

pub mod memory;
pub mod migrations;
pub mod sqlite;

pub use memory::MemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;
