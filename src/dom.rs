use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Create one unit span: inline-block so it carries its own transform,
/// `will-change: transform` so the renderer keeps it on a compositing layer.
pub fn create_unit_span(document: &web::Document, text: &str) -> Result<web::HtmlElement, JsValue> {
    let el = document.create_element("span")?;
    let el: web::HtmlElement = el
        .dyn_into()
        .map_err(|_| JsValue::from_str("span is not an HtmlElement"))?;
    el.set_text_content(Some(text));
    el.set_attribute("style", "display:inline-block;will-change:transform;")?;
    Ok(el)
}

/// Viewport-space center of the element's rendered bounding box. Note the
/// rect includes any transform currently applied.
#[inline]
pub fn rect_center(el: &web::HtmlElement) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(
        (rect.left() + rect.width() * 0.5) as f32,
        (rect.top() + rect.height() * 0.5) as f32,
    )
}

/// Commit a 2D offset as the element's transform, additive to its natural
/// layout position.
#[inline]
pub fn set_translate(el: &web::HtmlElement, offset: Vec2) {
    let value = format!("translate({:.2}px, {:.2}px)", offset.x, offset.y);
    _ = el.style().set_property("transform", &value);
}
