//! Operator-visible diagnostic channel. Load failures land here, never in
//! the user-facing markup.

#[cfg(target_arch = "wasm32")]
pub fn report_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn report_error(message: &str) {
    eprintln!("{message}");
}
