//! WASM bindings for salting-policy.

use salting_policy::{validate, PasswordPolicy};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = "validatePassword")]
pub fn wasm_validate_password(password: &str) -> bool {
    validate(password)
}

/// Messages for every unmet requirement of the default policy; empty when valid.
#[wasm_bindgen(js_name = "checkPassword")]
pub fn wasm_check_password(password: &str) -> Vec<String> {
    match PasswordPolicy::default().check(password) {
        Ok(()) => Vec::new(),
        Err(violations) => violations.iter().map(ToString::to_string).collect(),
    }
}
