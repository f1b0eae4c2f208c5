#![cfg(target_arch = "wasm32")]
use crate::audio::{AudioRig, Cue};
use crate::constants::*;
use crate::core::{AppState, Clock, MapFit, SystemClock, MAP_TARGET_EXTENT, PRODUCT_ANCHOR};
use crate::frame::FrameContext;
use crate::host::Host;
use crate::render::MeshSlot;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod audio;
mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod host;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_overlay_buttons(
    document: &web::Document,
    state: &Rc<RefCell<AppState>>,
    host: &Rc<RefCell<Host>>,
    clock: &Rc<SystemClock>,
) {
    let (state_start, host_start, clock_start) = (state.clone(), host.clone(), clock.clone());
    dom::add_click_listener(document, START_BUTTON_ID, move || {
        let commands = state_start.borrow_mut().start_clicked(clock_start.now());
        host_start.borrow_mut().apply(commands);
    });

    let (state_flip, host_flip) = (state.clone(), host.clone());
    dom::add_click_listener(document, FLIP_BUTTON_ID, move || {
        let commands = state_flip.borrow_mut().flip_clicked();
        host_flip.borrow_mut().apply(commands);
    });
}

fn spawn_sound_load(audio_ctx: web::AudioContext, host: Rc<RefCell<Host>>, cue: Cue) {
    spawn_local(async move {
        let loaded = audio::load_buffer(&audio_ctx, cue.url()).await;
        let mut host = host.borrow_mut();
        let Some(rig) = host.audio.as_mut() else {
            return;
        };
        match loaded {
            Ok(buffer) => rig.sound_mut(cue).set_buffer(&audio_ctx, buffer),
            Err(e) => {
                log::warn!("[assets] {:?} sound unavailable: {:?}", cue, e);
                rig.sound_mut(cue).load_failed();
            }
        }
    });
}

fn spawn_model_loads(state: Rc<RefCell<AppState>>, frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    // Map: recentre + rescale, then derive the flight bounds from the result.
    {
        let state = state.clone();
        let frame_ctx = frame_ctx.clone();
        spawn_local(async move {
            let mesh = match assets::load_glb(MAP_URL).await {
                Ok(m) => m,
                Err(e) => {
                    log::warn!("[assets] map unavailable, flight unbounded: {:?}", e);
                    state.borrow_mut().map_failed();
                    return;
                }
            };
            let Some(raw) = mesh.bounds() else {
                state.borrow_mut().map_failed();
                return;
            };
            let fit = MapFit::new(&raw, MAP_TARGET_EXTENT);
            let bounds = fit.bounds(&raw);
            log::info!("[assets] map scale={:.3} bounds={:?}", fit.scale, bounds);
            state.borrow_mut().set_map_bounds(bounds);
            if let Some(g) = frame_ctx.borrow_mut().gpu.as_mut() {
                g.upload_mesh(MeshSlot::Map, &mesh);
                g.set_model(MeshSlot::Map, fit.matrix());
            }
        });
    }

    {
        let state = state.clone();
        let frame_ctx = frame_ctx.clone();
        spawn_local(async move {
            match assets::load_glb(PRODUCT_URL).await {
                Ok(mesh) => {
                    if let Some(g) = frame_ctx.borrow_mut().gpu.as_mut() {
                        g.upload_mesh(MeshSlot::Product, &mesh);
                    }
                    state.borrow_mut().set_product_ready(PRODUCT_ANCHOR);
                }
                Err(e) => {
                    log::warn!("[assets] product unavailable: {:?}", e);
                    state.borrow_mut().product_failed();
                }
            }
        });
    }

    spawn_local(async move {
        match assets::load_glb(DRONE_URL).await {
            Ok(mesh) => {
                if let Some(g) = frame_ctx.borrow_mut().gpu.as_mut() {
                    g.upload_mesh(MeshSlot::Drone, &mesh);
                }
            }
            Err(e) => log::warn!("[assets] drone overlay unavailable: {:?}", e),
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("drone-flythrough starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * RENDER_SCALE
    wire_canvas_resize(&canvas);

    let clock = Rc::new(SystemClock::new());
    let state = Rc::new(RefCell::new(AppState::default()));

    let cue_volume = state.borrow().config.startup.startup_cue_volume;
    let audio = match AudioRig::new(cue_volume) {
        Ok(a) => Some(a),
        Err(e) => {
            log::warn!("[audio] disabled: {:?}", e);
            None
        }
    };
    let audio_ctx = audio.as_ref().map(|a| a.ctx.clone());
    let host = Rc::new(RefCell::new(Host {
        document: document.clone(),
        audio,
    }));

    // Input is live before assets finish loading; the model tolerates that.
    events::wire_keyboard(state.clone(), host.clone(), clock.clone());
    events::wire_focus_loss(state.clone());
    wire_overlay_buttons(&document, &state, &host, &clock);

    if let Some(ctx) = audio_ctx {
        spawn_sound_load(ctx.clone(), host.clone(), Cue::Startup);
        spawn_sound_load(ctx, host.clone(), Cue::Motor);
    }

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(
        state.clone(),
        host,
        clock,
        canvas,
        gpu,
    )));
    spawn_model_loads(state, frame_ctx.clone());
    frame::start_loop(frame_ctx);

    Ok(())
}
