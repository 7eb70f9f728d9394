//! JavaScript bindings for partition tables

use crate::config::{PartitionConfig, TiePolicy};
use crate::generate::generate_with;
use crate::table::Table;
use wasm_bindgen::prelude::*;

/// JavaScript-friendly wrapper for Table
#[wasm_bindgen]
pub struct WasmTable {
    inner: Table,
}

#[wasm_bindgen]
impl WasmTable {
    /// Generate a table; pass `allowOverlap = true` to keep ties instead of
    /// rejecting more streams than candidates
    #[wasm_bindgen(constructor)]
    pub fn new(
        pool_len: usize,
        password_length: usize,
        stream_count: usize,
        allow_overlap: bool,
    ) -> Result<WasmTable, JsValue> {
        let tie_policy = if allow_overlap {
            TiePolicy::AllowOverlap
        } else {
            TiePolicy::Reject
        };
        let config = PartitionConfig::new(pool_len, password_length, stream_count)
            .with_tie_policy(tie_policy);

        match generate_with(&config) {
            Ok(inner) => Ok(WasmTable { inner }),
            Err(e) => {
                crate::console_warn!("passtable: refused {}: {}", config, e);
                Err(JsValue::from_str(&format!("Table generation failed: {}", e)))
            }
        }
    }

    /// Get `[first, last]` for a stream at a position (JSON string)
    #[wasm_bindgen(js_name = get)]
    pub fn get(&self, position: usize, stream: usize) -> Result<String, JsValue> {
        let entry = self
            .inner
            .try_get(position, stream)
            .map_err(|e| JsValue::from_str(&format!("Lookup failed: {}", e)))?;

        serde_json::to_string(&entry)
            .map_err(|e| JsValue::from_str(&format!("JSON serialization failed: {}", e)))
    }

    /// Get one stream's entries, position 0 first (JSON string)
    #[wasm_bindgen(js_name = column)]
    pub fn column(&self, stream: usize) -> Result<String, JsValue> {
        let column = self
            .inner
            .column(stream)
            .map_err(|e| JsValue::from_str(&format!("Lookup failed: {}", e)))?;

        serde_json::to_string(&column)
            .map_err(|e| JsValue::from_str(&format!("JSON serialization failed: {}", e)))
    }

    /// Number of character positions
    #[wasm_bindgen(js_name = rows)]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    /// Number of streams
    #[wasm_bindgen(js_name = cols)]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    /// Number of pool symbols
    #[wasm_bindgen(js_name = poolLen)]
    pub fn pool_len(&self) -> usize {
        self.inner.pool_len()
    }

    /// Export as JSON string
    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner)
            .map_err(|e| JsValue::from_str(&format!("JSON serialization failed: {}", e)))
    }

    /// Render one line per stream
    #[wasm_bindgen(js_name = toString)]
    pub fn to_display_string(&self) -> String {
        self.inner.to_string()
    }
}
