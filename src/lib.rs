#![cfg(target_arch = "wasm32")]
//! Magnetic text displacement: containers are split into word or letter
//! spans, each pushed away from the pointer within a radius of influence
//! and eased back to rest by a per-frame lerp. Pure state lives in
//! [`core`]; the DOM layer only decomposes, measures, and commits
//! transforms.

use crate::core::{Granularity, MagnetConfig, MagnetField};
use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod core;
mod decompose;
mod dom;
mod events;
mod frame;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("magnet-text loaded");
    Ok(())
}

/// Everything one [`decompose`] call owns: the unit registry, the spans it
/// drives, the wired listeners, and the frame driver. The caller holds the
/// handle; there is no ambient singleton.
#[wasm_bindgen]
pub struct MagnetHandle {
    field: Rc<RefCell<MagnetField>>,
    spans: Rc<Vec<web::HtmlElement>>,
    pointer: events::ListenerBinding,
    resize: events::ListenerBinding,
    driver: frame::FrameDriver,
}

#[wasm_bindgen]
impl MagnetHandle {
    pub fn unit_count(&self) -> usize {
        self.field.borrow().len()
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    /// Cease scheduling frames and detach both listeners. Offsets freeze
    /// at their current values; no other cleanup is needed.
    pub fn stop(&mut self) {
        self.driver.stop();
        self.pointer.detach();
        self.resize.detach();
    }

    /// Re-attach listeners and resume the frame loop. A no-op while
    /// already running.
    pub fn start(&mut self) {
        self.pointer.attach();
        self.resize.attach();
        self.driver.start();
    }

    /// Re-measure every unit's rest position, e.g. after a font load.
    /// Resize is already handled by the wired listener.
    pub fn refresh(&self) {
        decompose::refresh_rest_positions(&mut self.field.borrow_mut(), &self.spans);
    }
}

/// Decompose every container matching `selector` into `"words"` or
/// `"letters"` units and start the effect with default tuning.
#[wasm_bindgen]
pub fn decompose(selector: &str, granularity: &str) -> Result<MagnetHandle, JsValue> {
    setup(selector, granularity, MagnetConfig::default()).map_err(to_js)
}

/// Same as [`decompose`] with explicit tuning. Out-of-range values are
/// clamped to usable ones, not rejected.
#[wasm_bindgen]
pub fn decompose_with_config(
    selector: &str,
    granularity: &str,
    radius: f32,
    max_displacement: f32,
    lerp_factor: f32,
) -> Result<MagnetHandle, JsValue> {
    let config = MagnetConfig {
        radius,
        max_displacement,
        lerp_factor,
    };
    setup(selector, granularity, config).map_err(to_js)
}

fn setup(selector: &str, granularity: &str, config: MagnetConfig) -> anyhow::Result<MagnetHandle> {
    let granularity = Granularity::from_str(granularity).map_err(|e| anyhow::anyhow!("{e}"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mut field = MagnetField::new(config);
    let spans = decompose::decompose_all(&document, selector, granularity, &mut field)?;
    log::info!(
        "[setup] selector {:?}: {} units ({:?})",
        selector,
        field.len(),
        granularity
    );

    let field = Rc::new(RefCell::new(field));
    let spans = Rc::new(spans);

    let pointer = events::pointer_influence(field.clone());
    let resize = events::resize_remeasure(field.clone(), spans.clone());
    let driver = frame::FrameDriver::new(frame::FrameContext {
        field: field.clone(),
        spans: spans.clone(),
    });
    driver.start();

    Ok(MagnetHandle {
        field,
        spans,
        pointer,
        resize,
        driver,
    })
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}
