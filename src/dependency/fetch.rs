use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, RequestMode, Response};

use crate::types::Dataset;

/// Fetches the dataset once, bypassing the HTTP cache. Any failure here is
/// terminal for the session; the caller surfaces it and stops.
pub async fn fetch_dataset(url: &str) -> Result<Dataset, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_cache(RequestCache::NoStore);

    let request = Request::new_with_str_and_init(url, &opts)?;
    let response_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|_| JsValue::from_str("fetch did not return a Response"))?;

    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "failed to load {url} (status {})",
            response.status()
        )));
    }

    let json = JsFuture::from(response.json()?).await?;
    serde_wasm_bindgen::from_value(json).map_err(|err| JsValue::from_str(&err.to_string()))
}
