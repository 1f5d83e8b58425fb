//! The per-frame driver: integrates every unit toward its target and
//! commits the offsets as transforms, once per display refresh.

use crate::core::{DriverState, MagnetField};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: Rc<RefCell<MagnetField>>,
    pub spans: Rc<Vec<web::HtmlElement>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut field = self.field.borrow_mut();
        field.integrate();
        // spans are index-aligned with the registry; zip tolerates an
        // empty registry and only visits units present at tick start
        for (unit, span) in field.units.iter().zip(self.spans.iter()) {
            dom::set_translate(span, unit.current);
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drives [`FrameContext::frame`] from requestAnimationFrame. One closure
/// is built up front and owned here; [`DriverState`] tracks the single
/// outstanding frame request so `stop` can cancel it — a queued callback
/// surviving a stop/start pair would otherwise reschedule itself alongside
/// the new one and double the integration rate.
pub struct FrameDriver {
    state: Rc<RefCell<DriverState>>,
    tick: TickSlot,
}

impl FrameDriver {
    pub fn new(ctx: FrameContext) -> Self {
        let ctx = Rc::new(RefCell::new(ctx));
        let state = Rc::new(RefCell::new(DriverState::default()));
        let tick: TickSlot = Rc::new(RefCell::new(None));

        let state_tick = state.clone();
        // weak, so the closure is freed with the driver instead of keeping
        // itself alive through the slot
        let tick_weak = Rc::downgrade(&tick);
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !state_tick.borrow_mut().on_tick() {
                return;
            }
            ctx.borrow_mut().frame();
            let Some(tick) = tick_weak.upgrade() else {
                return;
            };
            if let Some(id) = request_frame(&tick) {
                state_tick.borrow_mut().requested(id);
            }
        }) as Box<dyn FnMut()>));

        Self { state, tick }
    }

    /// Begin (or resume) the loop. A no-op while already running.
    pub fn start(&self) {
        if !self.state.borrow_mut().on_start() {
            return;
        }
        if let Some(id) = request_frame(&self.tick) {
            self.state.borrow_mut().requested(id);
        }
    }

    /// Cease scheduling and cancel the queued frame request, so a later
    /// `start` cannot race an old callback into a second loop.
    pub fn stop(&self) {
        if let Some(id) = self.state.borrow_mut().on_stop() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().is_running()
    }
}

impl Drop for FrameDriver {
    fn drop(&mut self) {
        // nothing queued may outlive the closure dropped with `tick`
        self.stop();
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let w = web::window()?;
    w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        .ok()
}
