//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the project tree from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the project tree from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Current project ID - read
    pub current_project: ReadSignal<Option<u32>>,
    /// Last RPC error, surfaced as a toast - read
    pub toast: ReadSignal<Option<String>>,
    set_toast: WriteSignal<Option<String>>,
}

/// How long an error toast stays up
const TOAST_MS: u32 = 4_000;

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        current_project: ReadSignal<Option<u32>>,
        toast: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            current_project,
            toast: toast.0,
            set_toast: toast.1,
        }
    }

    /// Trigger a reload of the project tree
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show an RPC error toast, auto-dismissed after a few seconds
    pub fn show_error(&self, message: String) {
        web_sys::console::log_1(&format!("[RPC] error: {message}").into());
        self.set_toast.set(Some(message));
        let set_toast = self.set_toast;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
            set_toast.set(None);
        });
    }
}
