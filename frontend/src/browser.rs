//! Thin wrappers over the `web_sys` calls the app needs.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::{AppError, Result};

pub fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| AppError::Browser("no global window".to_string()))
}

pub fn current_path() -> Result<String> {
    window()?
        .location()
        .pathname()
        .map_err(|e| AppError::from_js("location.pathname", e))
}

pub fn push_path(path: &str) -> Result<()> {
    window()?
        .history()
        .map_err(|e| AppError::from_js("history", e))?
        .push_state_with_url(&JsValue::NULL, "", Some(path))
        .map_err(|e| AppError::from_js("history.pushState", e))
}

pub fn replace_path(path: &str) -> Result<()> {
    window()?
        .history()
        .map_err(|e| AppError::from_js("history", e))?
        .replace_state_with_url(&JsValue::NULL, "", Some(path))
        .map_err(|e| AppError::from_js("history.replaceState", e))
}

/// Resolves after `ms` milliseconds via `setTimeout`.
pub async fn sleep(ms: u32) -> Result<()> {
    let window = window()?;
    let timeout = i32::try_from(ms).unwrap_or(i32::MAX);
    let mut scheduled = Ok(());
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        scheduled = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout)
            .map(|_| ());
    });
    scheduled.map_err(|e| AppError::Timer(format!("{:?}", e)))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| AppError::Timer(format!("{:?}", e)))?;
    Ok(())
}

/// Keeps a `popstate` handler registered until dropped.
pub struct PopStateListener {
    window: web_sys::Window,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl PopStateListener {
    pub fn new(on_change: impl Fn(String) + 'static) -> Result<Self> {
        let window = window()?;
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| match current_path() {
            Ok(path) => on_change(path),
            Err(e) => log::warn!("popstate without a path: {}", e),
        }) as Box<dyn FnMut(web_sys::Event)>);
        window
            .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
            .map_err(|e| AppError::from_js("addEventListener(popstate)", e))?;
        Ok(Self { window, closure })
    }
}

impl Drop for PopStateListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("popstate", self.closure.as_ref().unchecked_ref());
    }
}
