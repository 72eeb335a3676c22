//! Toast stack rendered in the top-right corner.
//!
//! `notify` is the single entry point: it pushes a notification, reveals it
//! after a short delay so the slide-in runs, and schedules auto-dismissal.

use leptos::prelude::*;
use leptos_meta::Style;

use crate::config::SiteConfig;
use crate::state::notification::{Notification, NotificationState, Severity};

const NOTIFICATION_STYLES: &str = r"
.notification-stack {
    position: fixed;
    top: 20px;
    right: 20px;
    z-index: 10000;
    display: flex;
    flex-direction: column;
    gap: 12px;
}
.notification {
    background: white;
    border-radius: 8px;
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
    transform: translateX(420px);
    transition: transform 0.3s ease;
    max-width: 400px;
}
.notification.show {
    transform: translateX(0);
}
.notification-success {
    border-left: 4px solid #10b981;
}
.notification-error {
    border-left: 4px solid #ef4444;
}
.notification-info {
    border-left: 4px solid #3b82f6;
}
.notification-content {
    display: flex;
    align-items: center;
    gap: 12px;
    padding: 16px 20px;
}
.notification-success i {
    color: #10b981;
}
.notification-error i {
    color: #ef4444;
}
.notification-close {
    background: none;
    border: none;
    cursor: pointer;
    color: #6b7280;
    margin-left: auto;
}
.notification-close:hover {
    color: #374151;
}
";

/// Show a notification and schedule its auto-dismissal.
pub fn notify(notifications: RwSignal<NotificationState>, config: SiteConfig, message: &str, severity: Severity) {
    let Some(id) = notifications.try_update(|n| n.push(message, severity)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Timeout;

        Timeout::new(config.notification_show_delay_ms, move || notifications.update(|n| n.reveal(id))).forget();
        Timeout::new(config.notification_dismiss_ms, move || dismiss(notifications, config, id)).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, id);
    }
}

/// Start the exit transition, then drop the notification once it finishes.
pub fn dismiss(notifications: RwSignal<NotificationState>, config: SiteConfig, id: u64) {
    let started = notifications.try_update(|n| n.dismiss(id)).unwrap_or(false);
    if !started {
        return;
    }

    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(config.notification_exit_ms(), move || notifications.update(|n| n.remove(id)))
        .forget();
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        notifications.update(|n| n.remove(id));
    }
}

#[component]
fn Toast(item: Notification) -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let config = expect_context::<SiteConfig>();
    let id = item.id;

    view! {
        <div
            class=format!("notification {}", item.severity.css_class())
            class:show=move || notifications.with(|n| n.is_visible(id))
            role="status"
        >
            <div class="notification-content">
                <i class=format!("fas {}", item.severity.icon_class())></i>
                <span>{item.message}</span>
                <button
                    class="notification-close"
                    aria-label="Cerrar"
                    on:click=move |_| dismiss(notifications, config, id)
                >
                    <i class="fas fa-times"></i>
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();

    view! {
        <Style id="notification-styles">{NOTIFICATION_STYLES}</Style>
        <div class="notification-stack" aria-live="polite">
            <For
                each=move || notifications.with(|n| n.items().to_vec())
                key=|item| item.id
                children=move |item| view! { <Toast item/> }
            />
        </div>
    }
}
