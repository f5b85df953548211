// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Embedded database migrations using refinery.

use realme_core::RealmeError;

mod embedded {
    use refinery::embed_migrations;
    embed_migrations!("migrations");
}

/// Run all pending migrations against the given connection.
pub fn run_migrations(conn: &mut rusqlite::Connection) -> Result<(), RealmeError> {
    embedded::migrations::runner()
        .run(conn)
        .map_err(|e| RealmeError::Storage {
            source: Box::new(e),
        })?;
    Ok(())
}
