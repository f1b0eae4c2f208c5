use crate::constants::{HIDDEN_CLASS, RENDER_SCALE};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Toggle the `hidden` class on an element; missing elements are ignored.
#[inline]
pub fn set_hidden(document: &web::Document, element_id: &str, hidden: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let cl = el.class_list();
        _ = if hidden {
            cl.add_1(HIDDEN_CLASS)
        } else {
            cl.remove_1(HIDDEN_CLASS)
        };
    }
}

pub fn set_image_src(document: &web::Document, element_id: &str, src: &str) {
    if let Some(img) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
    {
        img.set_src(src);
    }
}

/// Fade an element to transparent, then remove it from the document.
pub fn fade_out_and_remove(document: &web::Document, element_id: &str, fade_ms: i32) {
    let Some(el) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let style = el.style();
    _ = style.set_property("transition", &format!("opacity {}s ease", fade_ms as f32 / 1000.0));
    _ = style.set_property("opacity", "0");
    if let Some(window) = web::window() {
        let closure = Closure::once_into_js(move || el.remove());
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref(),
            fade_ms,
        );
    }
}

/// Backing store follows CSS size scaled by `RENDER_SCALE` (pixel ratio 1).
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * RENDER_SCALE) as u32;
    let h_px = (rect.height() * RENDER_SCALE) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
}
