use na::vector;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Float32Array;

use crate::{
    anchor::Anchors,
    config::RopeConfig,
    interface::util::to_js_error,
    simulate::RopeSimulator,
    toJsFloat32Array,
    types::Float,
};

/// WebAssembly interface to a rope simulator
#[wasm_bindgen]
pub struct InterfaceRope {
    pub(crate) inner: RopeSimulator,
}

#[wasm_bindgen]
impl InterfaceRope {
    /// One fixed physics step
    pub fn step(&mut self, dt: Float) {
        self.inner.step(dt);
    }

    /// Feed frame time; runs the fixed steps it covers and returns how many
    pub fn advance(&mut self, frame_dt: Float) -> usize {
        self.inner.advance(frame_dt)
    }

    #[wasm_bindgen(js_name = setAnchors)]
    pub fn set_anchors(&mut self, sx: Float, sy: Float, ex: Float, ey: Float) {
        self.inner.set_anchors(Anchors::new(vector![sx, sy], vector![ex, ey]));
    }

    #[wasm_bindgen(js_name = setSegmentCount)]
    pub fn set_segment_count(&mut self, count: usize) -> Result<(), JsValue> {
        self.inner.rope.set_segment_count(count).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = setSegmentRestLength)]
    pub fn set_segment_rest_length(&mut self, length: Float) -> Result<(), JsValue> {
        self.inner
            .rope
            .set_segment_rest_length(length)
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = setGravity)]
    pub fn set_gravity(&mut self, x: Float, y: Float) -> Result<(), JsValue> {
        self.inner
            .rope
            .set_gravity(vector![x, y])
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = setConstraintIterations)]
    pub fn set_constraint_iterations(&mut self, iterations: usize) -> Result<(), JsValue> {
        self.inner
            .rope
            .set_constraint_iterations(iterations)
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = setLineWidth)]
    pub fn set_line_width(&mut self, width: Float) -> Result<(), JsValue> {
        self.inner.rope.set_line_width(width).map_err(to_js_error)
    }

    /// xyz triples of the rope points, for a line strip
    pub fn positions(&mut self) -> Float32Array {
        let xyz: Vec<Float> = self
            .inner
            .render_positions()
            .iter()
            .flat_map(|p| p.iter().copied())
            .collect();
        toJsFloat32Array!(xyz)
    }

    /// Anchor centers as [sx, sy, ex, ey], for drawing debug markers
    pub fn anchors(&self) -> Float32Array {
        let (start, end) = self.inner.gizmos().line;
        toJsFloat32Array!([start.x, start.y, end.x, end.y])
    }

    #[wasm_bindgen(js_name = lineWidth)]
    pub fn line_width(&self) -> Float {
        self.inner.line_width()
    }
}

/// Create a rope from a JSON config. Missing fields take their defaults.
#[wasm_bindgen]
pub fn createRope(
    config_json: &str,
    sx: Float,
    sy: Float,
    ex: Float,
    ey: Float,
) -> Result<InterfaceRope, JsValue> {
    console_error_panic_hook::set_once();

    let config = RopeConfig::from_json_str(config_json).map_err(to_js_error)?;
    let anchors = Anchors::new(vector![sx, sy], vector![ex, ey]);
    let inner = RopeSimulator::new(config, anchors).map_err(to_js_error)?;
    Ok(InterfaceRope { inner })
}

#[wasm_bindgen]
pub fn createDefaultRope(
    sx: Float,
    sy: Float,
    ex: Float,
    ey: Float,
) -> Result<InterfaceRope, JsValue> {
    createRope("{}", sx, sy, ex, ey)
}
