use wasm_bindgen::JsValue;

use crate::config::ConfigError;

/// Surface a configuration error as a thrown JS exception
pub fn to_js_error(e: ConfigError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[macro_export]
macro_rules! toJsFloat32Array {
    ($q:expr) => {
        Float32Array::from(
            $q.iter()
                .map(|qi| *qi as f32)
                .collect::<Vec<f32>>()
                .as_slice(),
        )
    };
}
