//! Global notification channel (success / warning / error toasts)

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::config::NOTICE_TTL_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    fn class(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "notice notice--success",
            NoticeLevel::Info => "notice notice--info",
            NoticeLevel::Warning => "notice notice--warning",
            NoticeLevel::Error => "notice notice--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Stack of transient notices; each one expires after `ttl_ms`
#[derive(Clone, Copy)]
pub struct NotificationService {
    notices: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
    ttl_ms: u32,
}

impl NotificationService {
    pub fn new(ttl_ms: u32) -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
            ttl_ms,
        }
    }

    pub fn push(&self, level: NoticeLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            NoticeLevel::Error => log::error!("{}", message),
            NoticeLevel::Warning => log::warn!("{}", message),
            _ => log::info!("{}", message),
        }

        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.notices.update(|list| list.push(Notice { id, level, message }));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(svc.ttl_ms).await;
            svc.dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Success, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        let _ = self.notices.try_update(|list| list.retain(|n| n.id != id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new(NOTICE_TTL_MS)
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the notice stack; mounted once at the application root
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_notifications();

    view! {
        <div class="notice-host">
            <For
                each=move || svc.notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.level.class() on:click=move |_| svc.dismiss(id)>
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
