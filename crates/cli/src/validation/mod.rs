// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Submission validation engine.

pub mod methods;
pub mod result;
pub mod validator;

pub use methods::{allowed_methods, is_valid_method, VALID_METHODS};
pub use result::{CheckResult, Summary, ValidationReport};
pub use validator::{check_names, ValidationError, Validator};
