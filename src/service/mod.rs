#[cfg(target_arch = "wasm32")]
mod controller;

use serde_wasm_bindgen;
use wasm_bindgen::prelude::*;

use crate::data::DirectoryData;
use crate::dependency::performance_now;
use crate::logic::run_query;
use crate::render::RenderOutput;
use crate::types::{Criteria, Dataset};

/// Directory handler exposed to the host page. Wraps the in-memory dataset
/// and runs one filter/score/sort/render pass per query.
#[wasm_bindgen]
pub struct Navigator {
    data: DirectoryData,
}

#[wasm_bindgen]
impl Navigator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            data: DirectoryData::new(),
        }
    }

    /// Installs a dataset, replacing any previous one.
    #[wasm_bindgen]
    pub fn load(&mut self, dataset: JsValue) -> Result<(), JsValue> {
        let dataset: Dataset = serde_wasm_bindgen::from_value(dataset)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        self.data.install(dataset);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn agent_count(&self) -> usize {
        self.data.agent_len()
    }

    #[wasm_bindgen]
    pub fn updated(&self) -> Option<String> {
        self.data.updated().map(str::to_owned)
    }

    /// The derived selector option sets for the current dataset.
    #[wasm_bindgen]
    pub fn filter_options(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.data.options()).unwrap_or(JsValue::NULL)
    }

    /// Runs one query pass for the given criteria and returns
    /// `{ cards_html, count_label, matched }`.
    #[wasm_bindgen]
    pub fn query(&mut self, criteria: JsValue) -> Result<JsValue, JsValue> {
        let criteria: Criteria = serde_wasm_bindgen::from_value(criteria)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        let output = self.query_with(&criteria);
        serde_wasm_bindgen::to_value(&output).map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Milliseconds spent in the most recent query pass, 0 when the timing
    /// source is unavailable.
    #[wasm_bindgen]
    pub fn last_query_duration(&self) -> f64 {
        self.data.metrics().last_query_duration_ms
    }

    #[wasm_bindgen]
    pub fn destroy(&mut self) {
        self.data.destroy();
    }
}

impl Navigator {
    /// Typed install path shared with the bootstrap controller.
    pub fn install(&mut self, dataset: Dataset) {
        self.data.install(dataset);
    }

    pub fn data(&self) -> &DirectoryData {
        &self.data
    }

    /// Typed query path shared by the wasm surface and the controller.
    pub fn query_with(&mut self, criteria: &Criteria) -> RenderOutput {
        let start = performance_now();
        let output = run_query(self.data.agents(), criteria);
        let end = performance_now();
        if start > 0.0 && end >= start {
            self.data.metrics_mut().update_query(end - start);
        }
        output
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
