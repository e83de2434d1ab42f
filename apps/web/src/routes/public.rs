//! Public marketing pages. Everything here renders without a session; the
//! catalog and blog content come straight from the API and expose nothing
//! sensitive.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="text-center py-12">
                <h1 class="text-4xl font-bold text-gray-900 dark:text-white">
                    "Casas prefabricadas a tu medida"
                </h1>
                <p class="mt-4 text-lg text-gray-500 dark:text-gray-400">
                    "Explora nuestros modelos y encuentra tu próximo hogar."
                </p>
            </div>
        </AppShell>
    }
}

#[component]
pub fn NosotrosPage() -> impl IntoView {
    view! {
        <AppShell>
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Nosotros"</h1>
            <p class="mt-4 text-gray-500 dark:text-gray-400">
                "Más de una década construyendo viviendas prefabricadas en Chile."
            </p>
        </AppShell>
    }
}

#[component]
pub fn PrefabricadasPage() -> impl IntoView {
    view! {
        <AppShell>
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                "Casas prefabricadas"
            </h1>
        </AppShell>
    }
}

#[derive(Params, PartialEq, Clone)]
struct DetalleParams {
    id: Option<String>,
}

#[component]
pub fn PrefabricadaDetallePage() -> impl IntoView {
    let params = use_params::<DetalleParams>();
    let id = move || {
        params
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default()
    };

    view! {
        <AppShell>
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                {move || format!("Modelo {}", id())}
            </h1>
        </AppShell>
    }
}

#[component]
pub fn ContactosPage() -> impl IntoView {
    view! {
        <AppShell>
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Contacto"</h1>
            <p class="mt-4 text-gray-500 dark:text-gray-400">
                "Escríbenos y te ayudamos a planificar tu proyecto."
            </p>
        </AppShell>
    }
}

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <AppShell>
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Blog"</h1>
        </AppShell>
    }
}

#[component]
pub fn BlogDetallePage() -> impl IntoView {
    let params = use_params::<DetalleParams>();
    let id = move || {
        params
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default()
    };

    view! {
        <AppShell>
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                {move || format!("Artículo {}", id())}
            </h1>
        </AppShell>
    }
}
