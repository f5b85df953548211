// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Realme integration tests.
//!
//! Provides a scripted generation adapter and canned fixtures for fast,
//! deterministic tests without calling a real model.
//!
//! # Components
//!
//! - [`MockGenerator`] - Generation adapter replaying scripted replies
//! - [`fixtures`] - Valid flow outputs and fixed dates

pub mod fixtures;
pub mod mock_generator;

pub use mock_generator::{MockGenerator, MockReply};
