use crate::app_lib::{ApiClient, AppConfig};
use crate::features::auth::{NavigationGuard, SessionProvider};
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    let api = ApiClient::new(&config.api_base_url);

    view! {
        <SessionProvider api=api>
            <Router>
                <NavigationGuard>
                    <AppRoutes />
                </NavigationGuard>
            </Router>
        </SessionProvider>
    }
}
