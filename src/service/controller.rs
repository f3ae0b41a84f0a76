//! Browser bootstrap: one dataset fetch at startup, control wiring, and the
//! full-redraw render cycle.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::constants::{
    CATEGORY_FILTER_ID, COMPLIANCE_FILTER_ID, CONTROL_IDS, COUNT_ID, DATA_URL,
    DEPLOYMENT_FILTER_ID, GRID_ID, LOAD_ERROR_MESSAGE, SEARCH_ID, SECTOR_FILTER_ID, SORT_ID,
    UPDATED_ID,
};
use crate::dependency::{console, dom, fetch};
use crate::types::{ComplianceFilter, Criteria, SortMode};

use super::Navigator;

#[wasm_bindgen(start)]
pub fn start() {
    spawn_local(async {
        if let Err(err) = init().await {
            report_load_failure(&err);
        }
    });
}

/// Fetch once, populate the selectors once, wire every control to a full
/// re-render, then render with no filters applied. A failure anywhere here
/// is terminal; the user reloads the page to retry.
async fn init() -> Result<(), JsValue> {
    let dataset = fetch::fetch_dataset(DATA_URL).await?;
    let document = dom::document()?;

    let mut navigator = Navigator::new();
    navigator.install(dataset);

    let options = navigator.data().options();
    dom::append_options(&document, CATEGORY_FILTER_ID, &options.categories)?;
    dom::append_options(&document, DEPLOYMENT_FILTER_ID, &options.deployments)?;
    dom::append_options(&document, SECTOR_FILTER_ID, &options.sectors)?;

    let updated = navigator
        .data()
        .updated()
        .map(|stamp| format!("Updated: {stamp}"))
        .unwrap_or_default();
    dom::set_text(&document, UPDATED_ID, &updated);

    let navigator = Rc::new(RefCell::new(navigator));

    let rerender: Rc<dyn Fn()> = {
        let navigator = navigator.clone();
        let document = document.clone();
        Rc::new(move || {
            let criteria = read_criteria(&document);
            let output = navigator.borrow_mut().query_with(&criteria);
            dom::replace_html(&document, GRID_ID, &output.cards_html);
            dom::set_text(&document, COUNT_ID, &output.count_label);
        })
    };

    for id in CONTROL_IDS {
        dom::on_control_change(&document, id, rerender.clone())?;
    }

    rerender();
    Ok(())
}

/// Reads the live control values into one immutable criteria snapshot for
/// this pass. No selection state is stored anywhere else.
fn read_criteria(document: &Document) -> Criteria {
    Criteria {
        search: dom::control_value(document, SEARCH_ID),
        category: dom::control_value(document, CATEGORY_FILTER_ID),
        deployment: dom::control_value(document, DEPLOYMENT_FILTER_ID),
        sector: dom::control_value(document, SECTOR_FILTER_ID),
        compliance: ComplianceFilter::parse(&dom::control_value(document, COMPLIANCE_FILTER_ID)),
        sort: SortMode::parse(&dom::control_value(document, SORT_ID)),
    }
}

/// Fixed message for the user, detail to the console for the operator.
fn report_load_failure(err: &JsValue) {
    if let Ok(document) = dom::document() {
        dom::set_text(&document, COUNT_ID, LOAD_ERROR_MESSAGE);
    }
    console::report_error(&format!("navigator init failed: {err:?}"));
}
