// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP method tokens accepted in the `type` column.

/// Accepted method tokens. Matching is case-sensitive.
pub const VALID_METHODS: [&str; 7] = ["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS"];

/// Whether `method` is one of [`VALID_METHODS`]
pub fn is_valid_method(method: &str) -> bool {
    VALID_METHODS.contains(&method)
}

/// The valid methods in alphabetical order, comma separated.
pub fn allowed_methods() -> String {
    let mut methods = VALID_METHODS;
    methods.sort_unstable();
    methods.join(", ")
}

#[cfg(test)]
#[path = "methods_tests.rs"]
mod tests;
