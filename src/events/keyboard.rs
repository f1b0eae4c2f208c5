use crate::core::{control_for_key, AppState, Clock, Control, SystemClock};
use crate::host::Host;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(
    ev: &web::KeyboardEvent,
    state: &Rc<RefCell<AppState>>,
    host: &Rc<RefCell<Host>>,
    clock: &SystemClock,
) {
    let key = ev.key();
    // Space would otherwise scroll the page.
    if control_for_key(&key) == Some(Control::Ascend) {
        ev.prevent_default();
    }
    let commands = state.borrow_mut().key_down(&key, clock.now());
    if !commands.is_empty() {
        log::debug!("[keys] {:?} -> {:?}", key, commands);
    }
    host.borrow_mut().apply(commands);
}

pub fn wire_keyboard(
    state: Rc<RefCell<AppState>>,
    host: Rc<RefCell<Host>>,
    clock: Rc<SystemClock>,
) {
    if let Some(window) = web::window() {
        let state_down = state.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_keydown(&ev, &state_down, &host, &clock);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();

        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                state.borrow_mut().key_up(&ev.key());
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

// Keys held while the tab loses focus never report keyup; drop them.
pub fn wire_focus_loss(state: Rc<RefCell<AppState>>) {
    if let Some(window) = web::window() {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            state.borrow_mut().clear_input();
        }) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
