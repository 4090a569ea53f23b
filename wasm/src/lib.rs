//! Bindings used by `ui/app.js`. Each exported type wraps one state machine
//! from the `client` crate; the page script only renders and does I/O.

use client::{EmailForm, RankPage, ResultModal};
use tier::Tier;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn is_valid_email(email: &str) -> bool {
    validation::is_valid_email(email)
}

#[wasm_bindgen]
pub fn close_delay_ms() -> u32 {
    client::CLOSE_DELAY.as_millis() as u32
}

#[wasm_bindgen]
#[derive(Default)]
pub struct Form(EmailForm);

#[wasm_bindgen]
impl Form {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: String) {
        self.0.set_email(email);
    }

    pub fn can_submit(&self, is_loading: bool) -> bool {
        self.0.can_submit(is_loading)
    }

    pub fn submit(&self, is_loading: bool) -> Option<String> {
        self.0.submit(is_loading)
    }

    pub fn button_label(is_loading: bool) -> String {
        EmailForm::button_label(is_loading).to_string()
    }
}

#[wasm_bindgen]
#[derive(Default)]
pub struct Page(RankPage);

#[wasm_bindgen]
impl Page {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, email: String) -> bool {
        self.0.begin(email)
    }

    pub fn fail(&mut self) {
        self.0.fail();
    }

    pub fn complete(&mut self, status: u16, body: &str) {
        self.0.complete(status, body);
    }

    pub fn dismiss(&mut self) {
        self.0.dismiss();
    }

    #[wasm_bindgen(getter)]
    pub fn is_loading(&self) -> bool {
        self.0.is_loading()
    }

    #[wasm_bindgen(getter)]
    pub fn error(&self) -> Option<String> {
        self.0.error().map(str::to_string)
    }

    #[wasm_bindgen(getter)]
    pub fn show_result(&self) -> bool {
        self.0.show_result()
    }

    /// The modal for the current result, if there is one to show.
    pub fn modal(&self) -> Option<Modal> {
        if !self.0.show_result() {
            return None;
        }
        self.0
            .result()
            .map(|result| Modal::new(result.tier.as_str(), &result.email))
    }
}

#[wasm_bindgen]
pub struct Modal(ResultModal);

#[wasm_bindgen]
impl Modal {
    #[wasm_bindgen(constructor)]
    pub fn new(tier: &str, email: &str) -> Self {
        Self(ResultModal::new(Tier::from(tier), email))
    }

    pub fn opened(&mut self) {
        self.0.opened();
    }

    /// Ticket of the timer to start, or nothing if already closing.
    pub fn close(&mut self) -> Option<u32> {
        self.0.close().map(|timer| timer.ticket)
    }

    pub fn timer_elapsed(&mut self, ticket: u32) -> bool {
        self.0.timer_elapsed(ticket)
    }

    pub fn unmount(&mut self) {
        self.0.unmount();
    }

    #[wasm_bindgen(getter)]
    pub fn is_visible(&self) -> bool {
        self.0.is_visible()
    }

    #[wasm_bindgen(getter)]
    pub fn is_mounted(&self) -> bool {
        self.0.is_mounted()
    }

    #[wasm_bindgen(getter)]
    pub fn label(&self) -> String {
        self.0.label()
    }

    #[wasm_bindgen(getter)]
    pub fn email(&self) -> String {
        self.0.email().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn color(&self) -> String {
        self.0.style().color.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn badge_class(&self) -> String {
        self.0.style().badge_class.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> Option<String> {
        self.0.style().message.map(str::to_string)
    }
}
