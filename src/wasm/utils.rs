//! WASM utility functions

use wasm_bindgen::prelude::*;

/// Route Rust panics (e.g. out-of-range `Table::get`) to the browser console
#[wasm_bindgen(js_name = initPanicHook)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn warn(s: &str);
}

/// Forward a formatted diagnostic to `console.warn`
///
/// Generation failures are reported here as well as through the error
/// thrown to the caller, so a worker pool that swallows exceptions still
/// shows why a table was refused.
#[macro_export]
macro_rules! console_warn {
    ($($t:tt)*) => {
        $crate::wasm::utils::warn(&format_args!($($t)*).to_string())
    }
}
