//! WASM bindings for salting-auth.

use crate::error::to_js_error;
use salting_auth::{Authenticator, Token, DEFAULT_COST, MAX_COST};
use wasm_bindgen::prelude::*;
use zeroize::Zeroize;

// --- Constants ---

#[wasm_bindgen(js_name = "DEFAULT_COST")]
pub fn default_cost() -> u32 {
    DEFAULT_COST
}

#[wasm_bindgen(js_name = "MAX_COST")]
pub fn max_cost() -> u32 {
    MAX_COST
}

// --- Authenticator ---

/// Password authenticator. Passwords are taken as owned byte buffers so the
/// wasm-side copy can be wiped once hashing finishes.
#[wasm_bindgen(js_name = "Authenticator")]
pub struct WasmAuthenticator {
    inner: Authenticator,
}

#[wasm_bindgen(js_class = "Authenticator")]
impl WasmAuthenticator {
    #[wasm_bindgen(constructor)]
    pub fn new(cost: Option<i32>) -> Result<WasmAuthenticator, JsValue> {
        let inner = match cost {
            Some(cost) => Authenticator::new(i64::from(cost)).map_err(to_js_error)?,
            None => Authenticator::with_default_cost(),
        };
        Ok(Self { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn cost(&self) -> u32 {
        self.inner.cost().get()
    }

    pub fn hash(&self, mut password: Vec<u8>) -> Result<String, JsValue> {
        let result = self.inner.hash(&password);
        password.zeroize();
        result.map_err(to_js_error)
    }

    pub fn authenticate(&self, mut password: Vec<u8>, token: &str) -> Result<bool, JsValue> {
        let result = self.inner.authenticate(&password, token);
        password.zeroize();
        result.map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = "needsRehash")]
    pub fn needs_rehash(&self, token: &str) -> Result<bool, JsValue> {
        self.inner.needs_rehash(token).map_err(to_js_error)
    }
}

/// Cost embedded in a stored token.
#[wasm_bindgen(js_name = "tokenCost")]
pub fn wasm_token_cost(token: &str) -> Result<u32, JsValue> {
    Token::parse(token)
        .map(|t| t.cost().get())
        .map_err(to_js_error)
}
