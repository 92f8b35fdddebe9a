//! Browser-injected wallet provider (`window.ethereum`).
//!
//! Requires a browser environment; only compiled with the `hydrate` feature.

use js_sys::{Array, Function, Object, Promise, Reflect};
use passport::WalletError;
use passport::wallet::parse_chain_id;
use wasm_bindgen::{JsCast as _, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::wallet::WalletProvider;

/// Handle to the EIP-1193 provider object a wallet extension injects.
pub struct InjectedProvider {
    inner: JsValue,
}

impl InjectedProvider {
    /// Look up `window.ethereum`. Returns `None` when no extension injected one.
    pub fn detect() -> Option<Self> {
        let window: JsValue = web_sys::window()?.into();
        let inner = Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
        if inner.is_undefined() || inner.is_null() {
            return None;
        }
        Some(Self { inner })
    }

    /// Call `provider.request({ method })` and await the returned promise.
    async fn request(&self, method: &str) -> Result<JsValue, WalletError> {
        let args = Object::new();
        Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method)).map_err(rpc_error)?;

        let request = Reflect::get(&self.inner, &JsValue::from_str("request"))
            .map_err(rpc_error)?
            .dyn_into::<Function>()
            .map_err(|_| WalletError::Rpc { code: None, message: "provider has no request method".to_owned() })?;

        let promise = request
            .call1(&self.inner, &args)
            .map_err(rpc_error)?
            .dyn_into::<Promise>()
            .map_err(|_| WalletError::Rpc { code: None, message: format!("{method} did not return a promise") })?;

        JsFuture::from(promise).await.map_err(rpc_error)
    }
}

impl WalletProvider for InjectedProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        let value = self.request("eth_requestAccounts").await?;
        if !Array::is_array(&value) {
            return Err(WalletError::Rpc { code: None, message: "eth_requestAccounts returned a non-array".to_owned() });
        }
        Ok(Array::from(&value).iter().filter_map(|v| v.as_string()).collect())
    }

    async fn chain_id(&self) -> Result<u64, WalletError> {
        let value = self.request("eth_chainId").await?;
        let raw = value
            .as_string()
            .ok_or_else(|| WalletError::Rpc { code: None, message: "eth_chainId returned a non-string".to_owned() })?;
        parse_chain_id(&raw)
    }
}

/// Convert a thrown JS value (usually `{ code, message }`) into a `WalletError`.
#[allow(clippy::cast_possible_truncation)]
fn rpc_error(err: JsValue) -> WalletError {
    let code = Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|c| c as i64);
    let message = Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "unknown provider error".to_owned());
    WalletError::from_rpc(code, message)
}
