use crate::layout::notification_service::{NotificationHost, NotificationService};
use crate::routes::routes::AppRoutes;
use crate::shared::config::PosConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: PosConfig) -> impl IntoView {
    provide_context(config);

    // Page-wide queue of modal notices
    provide_context(NotificationService::new());

    view! {
        <AppRoutes />
        <NotificationHost />
    }
}
