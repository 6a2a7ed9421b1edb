use crate::shared::icons::icon;
use contracts::shared::api_error::ApiError;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long a toast stays on screen
pub const ALERT_TIMEOUT_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Info,
}

impl AlertKind {
    fn modifier(&self) -> &'static str {
        match self {
            AlertKind::Success => "alert--success",
            AlertKind::Error => "alert--error",
            AlertKind::Info => "alert--info",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            AlertKind::Success => "check",
            AlertKind::Error => "alert-triangle",
            AlertKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Alert {
    id: u64,
    kind: AlertKind,
    message: String,
}

/// Toast notifications shared by the whole app.
///
/// Alerts close by themselves after [`ALERT_TIMEOUT_MS`] or when clicked.
#[derive(Clone, Copy)]
pub struct AlertService {
    alerts: RwSignal<Vec<Alert>>,
    next_id: RwSignal<u64>,
}

impl AlertService {
    pub fn new() -> Self {
        Self {
            alerts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn show(&self, kind: AlertKind, message: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        let message = message.into();
        self.alerts.update(|a| a.push(Alert { id, kind, message }));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(ALERT_TIMEOUT_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(AlertKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(AlertKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(AlertKind::Info, message);
    }

    /// Localized toast for a failed API call
    pub fn api_error(&self, err: &ApiError) {
        self.error(err.user_message());
    }

    pub fn dismiss(&self, id: u64) {
        self.alerts.update(|a| a.retain(|alert| alert.id != id));
    }
}

impl Default for AlertService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_alerts() -> AlertService {
    use_context::<AlertService>().expect("AlertService not provided in context")
}

/// Renders the toasts at the application root. Must be mounted once.
#[component]
pub fn AlertHost() -> impl IntoView {
    let svc = use_alerts();

    view! {
        <div class="alert-host">
            <For
                each=move || svc.alerts.get()
                key=|alert| alert.id
                children=move |alert| {
                    let id = alert.id;
                    view! {
                        <div
                            class=format!("alert {}", alert.kind.modifier())
                            role="alert"
                            on:click=move |_| svc.dismiss(id)
                        >
                            <span class="alert__icon">{icon(alert.kind.icon_name())}</span>
                            <span class="alert__message">{alert.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
