//! Browser-side behavior for the AA Web Creations marketing site.
//!
//! This crate is compiled to WebAssembly and loaded by `website/index.html`.
//! Every decision the page makes (navbar styling, which section is active,
//! what a submit outcome looks like, what lands in the local echo) lives in
//! plain types that are tested natively. Only [`dom`] and [`net`] touch the
//! browser, and only with the `browser` feature enabled.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`form`] | Contact form payload, validation and submit outcomes |
//! | [`echo`] | Local echo store over a key/value backend |
//! | [`toast`] | Status banner kinds and styling |
//! | [`scroll`] | Navbar, parallax and active-link decisions |
//! | [`menu`] | Mobile menu open/close state |
//! | [`effects`] | Fade-in reveal, skill bars and hover transforms |
//! | [`net`] | POST to the contact endpoint |
//! | [`dom`] | Event wiring (browser only) |
//! | [`consts`] | Thresholds, selectors and style values |

pub mod consts;
#[cfg(feature = "browser")]
pub mod dom;
pub mod echo;
pub mod effects;
pub mod form;
pub mod menu;
pub mod net;
pub mod scroll;
pub mod toast;

#[cfg(feature = "browser")]
use wasm_bindgen::prelude::*;

/// Module entry point: install panic/log hooks and wire the page.
#[cfg(feature = "browser")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
    }
    dom::install()?;
    log::info!("AA Web Creations - script loaded");
    log::info!("local echo helpers: getAllSubmissions(), exportSubmissionsAsJSON()");
    Ok(())
}

/// Console helper: every local echo entry, as a JS array.
#[cfg(feature = "browser")]
#[wasm_bindgen(js_name = getAllSubmissions)]
pub fn get_all_submissions() -> Result<JsValue, JsValue> {
    let echo = dom::browser_echo()?;
    let entries = echo.list();
    log::info!("retrieved {} local submissions", entries.len());
    js_sys::JSON::parse(&echo.export_json())
}

/// Console helper: download the local echo as a JSON file.
#[cfg(feature = "browser")]
#[wasm_bindgen(js_name = exportSubmissionsAsJSON)]
pub fn export_submissions_as_json() -> Result<(), JsValue> {
    let echo = dom::browser_echo()?;
    dom::download_json(&echo.export_filename(js_sys::Date::now()), &echo.export_json())?;
    log::info!("local submissions exported as JSON");
    Ok(())
}
