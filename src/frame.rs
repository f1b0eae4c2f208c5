use crate::camera::Camera;
use crate::core::{
    AppState, Clock, FixedStep, SystemClock, MAX_TICKS_PER_FRAME, PRODUCT_SCALE, TICK_HZ,
};
use crate::host::Host;
use crate::render::{self, FrameParams, MeshSlot};
use glam::{Mat4, Vec3};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub state: Rc<RefCell<AppState>>,
    pub host: Rc<RefCell<Host>>,
    pub clock: Rc<SystemClock>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub stepper: FixedStep,
    pub last_now: Duration,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        state: Rc<RefCell<AppState>>,
        host: Rc<RefCell<Host>>,
        clock: Rc<SystemClock>,
        canvas: web::HtmlCanvasElement,
        gpu: Option<render::GpuState<'a>>,
    ) -> Self {
        let last_now = clock.now();
        Self {
            state,
            host,
            clock,
            canvas,
            gpu,
            stepper: FixedStep::new(TICK_HZ, MAX_TICKS_PER_FRAME),
            last_now,
        }
    }

    pub fn frame(&mut self) {
        let now = self.clock.now();
        let dt = now.saturating_sub(self.last_now);
        self.last_now = now;

        let ticks = self.stepper.advance(dt);
        for _ in 0..ticks {
            let commands = self.state.borrow_mut().tick(now);
            self.host.borrow_mut().apply(commands);
        }

        let Some(g) = &mut self.gpu else {
            return;
        };
        let state = self.state.borrow();
        let (w, h) = (self.canvas.width(), self.canvas.height());
        g.resize_if_needed(w, h);

        let camera = Camera::from_flight(state.flight(), w, h);
        g.set_model(MeshSlot::Drone, camera.drone_model(&state.drone_pose()));
        if let Some(p) = state.product_position() {
            g.set_model(
                MeshSlot::Product,
                Mat4::from_translation(p) * Mat4::from_scale(Vec3::splat(PRODUCT_SCALE)),
            );
        }

        let effects = state.effects();
        let params = FrameParams {
            view_proj: camera.view_proj(),
            eye: camera.eye,
            lighting: effects.lighting(),
            time: effects.elapsed,
            fade: effects.fade,
            night: effects.night_uniform(),
            flash: effects.flash,
        };
        if let Err(e) = g.render(&params) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
