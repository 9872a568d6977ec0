//! Window glue: timers, scroll listeners and small DOM helpers.
//!
//! Timer and listener handles unregister themselves when dropped, so a
//! component can hold one for exactly as long as it is mounted.

use js_sys::{Date, Object, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Event, HtmlImageElement, ScrollBehavior, ScrollToOptions};
use yew::Callback;

use crate::telemetry::{log_event, LogLevel};
use serde_json::json;

pub const FALLBACK_IMAGE: &str = "/images/fallback.jpg";

/// Repeating timer, cleared on drop.
pub struct Interval {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(period_ms: u32, callback: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut()>::new(callback);
        let handle = window()?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                timeout_arg(period_ms),
            )
            .ok()?;

        Some(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(self.handle);
        }
    }
}

/// One-shot timer, cancelled on drop if it has not fired yet.
pub struct Timeout {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(delay_ms: u32, callback: impl FnOnce() + 'static) -> Option<Self> {
        let mut callback = Some(callback);
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(callback) = callback.take() {
                callback();
            }
        });
        let handle = window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                timeout_arg(delay_ms),
            )
            .ok()?;

        Some(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_timeout_with_handle(self.handle);
        }
    }
}

fn timeout_arg(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

/// Window `scroll` subscription that reports the vertical offset, removed on drop.
pub struct ScrollListener {
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn new(on_offset: impl Fn(f64) + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut()>::new(move || on_offset(scroll_y()));

        if let Err(error) = window()?
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            log_event(
                LogLevel::Warn,
                "scroll_listener_failed",
                json!({ "error": format!("{error:?}") }),
            );
            return None;
        }

        Some(Self { callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win.remove_event_listener_with_callback(
                "scroll",
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

pub fn scroll_y() -> f64 {
    window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn scroll_to_top() {
    if let Some(win) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn current_year() -> u32 {
    Date::new_0().get_full_year()
}

/// Local wall-clock time formatted like "Mon, Oct 19, 2026, 3:04 PM".
pub fn submission_timestamp() -> String {
    let options = Object::new();
    for (key, value) in [
        ("weekday", "short"),
        ("month", "short"),
        ("day", "numeric"),
        ("year", "numeric"),
        ("hour", "numeric"),
        ("minute", "2-digit"),
    ] {
        let _ = Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value));
    }
    let _ = Reflect::set(&options, &JsValue::from_str("hour12"), &JsValue::TRUE);

    Date::new_0()
        .to_locale_string("en-US", &options)
        .as_string()
        .unwrap_or_default()
}

/// `onerror` handler that swaps a broken image for [`FALLBACK_IMAGE`] once.
pub fn image_fallback() -> Callback<Event> {
    Callback::from(|event: Event| {
        let Some(image) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlImageElement>().ok())
        else {
            return;
        };

        if !image.src().ends_with(FALLBACK_IMAGE) {
            image.set_src(FALLBACK_IMAGE);
        }
    })
}
