use leptos::prelude::*;

/// Layout state shared by the header and the sidebar
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().unwrap_or_else(|| {
        log::warn!("AppGlobalContext is not provided, using a detached one");
        AppGlobalContext::new()
    })
}
