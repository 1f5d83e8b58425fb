//! Window event wiring. Listeners are held by the handle rather than
//! leaked, so stopping the effect can detach them again.

use crate::core::MagnetField;
use crate::decompose;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A window listener plus the closure backing it. Detach/attach toggle the
/// registration; the closure itself stays alive as long as the binding.
pub struct ListenerBinding {
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
    attached: bool,
}

impl ListenerBinding {
    fn new(event: &'static str, closure: Closure<dyn FnMut(web::Event)>) -> Self {
        Self {
            event,
            closure,
            attached: false,
        }
    }

    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        if let Some(w) = web::window() {
            _ = w.add_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
            self.attached = true;
        }
    }

    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        if let Some(w) = web::window() {
            _ = w.remove_event_listener_with_callback(
                self.event,
                self.closure.as_ref().unchecked_ref(),
            );
        }
        self.attached = false;
    }
}

/// Wire pointermove: every sample recomputes each unit's target offset.
/// Client coordinates share the viewport space of the measured rest
/// positions, so no conversion is needed.
pub fn pointer_influence(field: Rc<RefCell<MagnetField>>) -> ListenerBinding {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
            let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            field.borrow_mut().apply_influence(pointer);
        }
    }) as Box<dyn FnMut(web::Event)>);
    let mut binding = ListenerBinding::new("pointermove", closure);
    binding.attach();
    binding
}

/// Wire window resize: rest positions measured at registration go stale
/// when layout changes, so re-measure all of them.
pub fn resize_remeasure(
    field: Rc<RefCell<MagnetField>>,
    spans: Rc<Vec<web::HtmlElement>>,
) -> ListenerBinding {
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        decompose::refresh_rest_positions(&mut field.borrow_mut(), &spans);
    }) as Box<dyn FnMut(web::Event)>);
    let mut binding = ListenerBinding::new("resize", closure);
    binding.attach();
    binding
}
