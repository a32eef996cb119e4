use crate::routes::routes::AppRoutes;
use crate::shared::notifications::NotificationService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One notice slot shared by the admin panel via context
    provide_context(NotificationService::new());

    view! {
        <AppRoutes />
    }
}
