use crate::constants::*;
use crate::dom;
use web_sys as web;

#[inline]
pub fn dismiss_start_screen(document: &web::Document) {
    dom::fade_out_and_remove(document, START_SCREEN_ID, START_SCREEN_FADE_MS);
}

#[inline]
pub fn set_prompt_visible(document: &web::Document, visible: bool) {
    dom::set_hidden(document, PROMPT_ID, !visible);
}

#[inline]
pub fn set_product_visible(document: &web::Document, visible: bool) {
    dom::set_hidden(document, PRODUCT_OVERLAY_ID, !visible);
}

#[inline]
pub fn set_product_image(document: &web::Document, src: &str) {
    dom::set_image_src(document, PRODUCT_IMAGE_ID, src);
}
