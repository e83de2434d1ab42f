//! Administration pages. Every route here is classified in the route
//! registry, so the navigation guard keeps visitors without the right
//! role out before these components mount. The pages themselves never
//! re-check roles; the sidebar only offers what the session can reach.

use crate::components::AdminShell;
use crate::features::auth::use_session;
use leptos::prelude::*;

/// Renders the admin landing page.
#[component]
pub fn AdministracionPage() -> impl IntoView {
    let store = use_session();
    let session = store.session();
    let user_id = move || session.with(|s| s.user_id().unwrap_or_default().to_string());

    view! {
        <AdminShell>
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Administración"
                </h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    {move || format!("Sesión iniciada como usuario {}", user_id())}
                </p>
            </div>
        </AdminShell>
    }
}

#[component]
pub fn AdministracionTiposPage() -> impl IntoView {
    view! {
        <AdminShell>
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Tipos de casa"</h1>
        </AdminShell>
    }
}

#[component]
pub fn AdministracionCategoriasPage() -> impl IntoView {
    view! {
        <AdminShell>
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Categorías"</h1>
        </AdminShell>
    }
}

#[component]
pub fn AdministracionEstilosPage() -> impl IntoView {
    view! {
        <AdminShell>
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Estilos"</h1>
        </AdminShell>
    }
}

#[component]
pub fn AdministracionEmpresaPage() -> impl IntoView {
    view! {
        <AdminShell>
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                "Datos de la empresa"
            </h1>
        </AdminShell>
    }
}

#[component]
pub fn AdministracionPortadasPage() -> impl IntoView {
    view! {
        <AdminShell>
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Portadas"</h1>
        </AdminShell>
    }
}

#[component]
pub fn AdministracionServiciosPage() -> impl IntoView {
    view! {
        <AdminShell>
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Servicios"</h1>
        </AdminShell>
    }
}

#[component]
pub fn AdministracionRedesPage() -> impl IntoView {
    view! {
        <AdminShell>
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Redes sociales"</h1>
        </AdminShell>
    }
}

#[component]
pub fn AdministracionNoticiasPage() -> impl IntoView {
    view! {
        <AdminShell>
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Noticias"</h1>
        </AdminShell>
    }
}

/// Catalog management, super admin only.
#[component]
pub fn AdministracionPrefabricadasManagerPage() -> impl IntoView {
    view! {
        <AdminShell>
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                "Casas prefabricadas"
            </h1>
        </AdminShell>
    }
}

#[component]
pub fn AdministracionUsuariosPage() -> impl IntoView {
    view! {
        <AdminShell>
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Usuarios"</h1>
        </AdminShell>
    }
}

#[component]
pub fn AdministracionRolesPage() -> impl IntoView {
    view! {
        <AdminShell>
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Roles"</h1>
        </AdminShell>
    }
}

#[component]
pub fn AdministracionRolesUsuariosPage() -> impl IntoView {
    view! {
        <AdminShell>
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                "Roles de usuarios"
            </h1>
        </AdminShell>
    }
}

/// Account data for the signed-in user. Requires a session but no role.
#[component]
pub fn AdministracionDatosUsuarioPage() -> impl IntoView {
    let store = use_session();
    let session = store.session();
    let user_id = move || session.with(|s| s.user_id().unwrap_or_default().to_string());

    view! {
        <AdminShell>
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Mis datos"</h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    {move || format!("Usuario {}", user_id())}
                </p>
            </div>
        </AdminShell>
    }
}
