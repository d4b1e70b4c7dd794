//! Entry points for plain page scripts that are not part of the Dioxus app.

use wasm_bindgen::prelude::*;

use crate::host::{BrowserPage, JsModal};
use crate::profile::show_applicant_profile_modal;
use crate::{load_config, make_session_manager, make_store};

/// `showApplicantProfileModal(applicantId, modalInstance)`
#[wasm_bindgen(js_name = showApplicantProfileModal)]
pub fn show_applicant_profile_modal_js(applicant_id: u32, modal: JsValue) -> Result<(), JsValue> {
    let config = load_config();
    show_applicant_profile_modal(
        &make_store(),
        &BrowserPage,
        applicant_id.into(),
        &JsModal(modal),
        &config.profile,
    )
    .map(|_| ())
    .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// `initializeMockData()`; returns whether defaults were installed.
#[wasm_bindgen(js_name = initializeMockData)]
pub fn initialize_mock_data_js() -> Result<bool, JsValue> {
    store::initialize_mock_data(&make_store(), &BrowserPage)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// `logoutUser()`
#[wasm_bindgen(js_name = logoutUser)]
pub fn logout_user_js() {
    make_session_manager(&load_config()).logout_user(&BrowserPage);
}
