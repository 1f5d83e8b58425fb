//! DOM side of the text decomposer: replaces a container's text with
//! per-unit spans and registers each unit's rest position in the field.

use crate::core::{split_units, Granularity, MagnetField};
use crate::dom;
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Replace `container`'s text content with one span per unit. One-way: the
/// original text nodes are dropped. An empty or whitespace-only container
/// produces zero spans and is not an error.
pub fn decompose_container(
    document: &web::Document,
    container: &web::Element,
    granularity: Granularity,
) -> anyhow::Result<Vec<web::HtmlElement>> {
    let text = container.text_content().unwrap_or_default();
    let units = split_units(&text, granularity);
    container.set_text_content(None);

    let mut spans = Vec::with_capacity(units.len());
    for (i, unit) in units.iter().enumerate() {
        if granularity == Granularity::Words && i > 0 {
            // plain text node between word spans so line wrapping behaves
            let sep = document.create_text_node(" ");
            container.append_child(&sep).map_err(js_err)?;
        }
        // a bare space collapses inside an inline-block; render NBSP
        let visible = if unit.as_str() == " " {
            "\u{00A0}"
        } else {
            unit.as_str()
        };
        let span = dom::create_unit_span(document, visible).map_err(js_err)?;
        container.append_child(&span).map_err(js_err)?;
        spans.push(span);
    }
    Ok(spans)
}

/// Decompose every container matching `selector` (evaluated once, at call
/// time) and register each span's bounding-box center as its rest
/// position. Zero matches is a no-op. Returns the spans in registry order.
pub fn decompose_all(
    document: &web::Document,
    selector: &str,
    granularity: Granularity,
    field: &mut MagnetField,
) -> anyhow::Result<Vec<web::HtmlElement>> {
    let containers = document.query_selector_all(selector).map_err(js_err)?;
    let mut spans = Vec::new();
    for i in 0..containers.length() {
        let Some(node) = containers.item(i) else {
            continue;
        };
        let Ok(el) = node.dyn_into::<web::Element>() else {
            continue;
        };
        spans.extend(decompose_container(document, &el, granularity)?);
    }
    // Measure only after every container has been mutated; the rect reads
    // force layout, so rest positions reflect the final wrapped structure.
    for span in &spans {
        field.register(dom::rect_center(span));
    }
    Ok(spans)
}

/// Re-measure every span and rewrite its rest position (offsets are left
/// alone). Used after layout changes: window resize, font load.
pub fn refresh_rest_positions(field: &mut MagnetField, spans: &[web::HtmlElement]) {
    for (i, span) in spans.iter().enumerate() {
        let current = field.units.get(i).map_or(Vec2::ZERO, |u| u.current);
        // the measured rect includes the applied transform; subtract it
        field.set_rest(i, dom::rect_center(span) - current);
    }
}
