//! Side navigation for the administration area.
//!
//! Organized by who can reach each section:
//! 1. Contenido (whole admin tier: catalog types, styles, covers, news)
//! 2. Plataforma (super administrators: houses, users, roles)
//! 3. Personal (any signed-in user: own account data)
//!
//! The links are gated by the same roles the route table stamps, so the
//! sidebar never offers a page the guard would bounce.

use crate::app_lib::build_info;
use crate::features::auth::use_session;
use crate::routes::registry::{ADMIN_AREA_ROLES, RouteId};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_session();
    let session = store.session();
    let can_manage_content =
        Signal::derive(move || session.with(|s| s.has_any_role(ADMIN_AREA_ROLES.iter().copied())));
    let is_super_admin = store.is_super_admin;
    let location = use_location();
    let pathname = move || location.pathname.get();

    let commit_short = build_info::short_commit_hash();

    view! {
        <aside class="w-64 flex-shrink-0 hidden md:flex flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 overflow-y-auto">
            <nav class="flex-1 px-4 py-6 space-y-8">
                // --- Section: Contenido ---
                <Show when=move || can_manage_content.get()>
                    <div>
                        <h3 class="px-2 text-xs font-semibold text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Contenido"
                        </h3>
                        <div class="mt-2 space-y-1">
                            <SidebarLink
                                target=RouteId::Administracion.path()
                                icon="dashboard"
                                label="Resumen"
                                active=move || pathname() == RouteId::Administracion.path()
                            />
                            <SidebarLink
                                target=RouteId::AdministracionTipos.path()
                                icon="category"
                                label="Tipos"
                                active=move || pathname() == RouteId::AdministracionTipos.path()
                            />
                            <SidebarLink
                                target=RouteId::AdministracionCategorias.path()
                                icon="sell"
                                label="Categorías"
                                active=move || pathname() == RouteId::AdministracionCategorias.path()
                            />
                            <SidebarLink
                                target=RouteId::AdministracionEstilos.path()
                                icon="palette"
                                label="Estilos"
                                active=move || pathname() == RouteId::AdministracionEstilos.path()
                            />
                            <SidebarLink
                                target=RouteId::AdministracionPortadas.path()
                                icon="wallpaper"
                                label="Portadas"
                                active=move || pathname() == RouteId::AdministracionPortadas.path()
                            />
                            <SidebarLink
                                target=RouteId::AdministracionServicios.path()
                                icon="handyman"
                                label="Servicios"
                                active=move || pathname() == RouteId::AdministracionServicios.path()
                            />
                            <SidebarLink
                                target=RouteId::AdministracionRedes.path()
                                icon="share"
                                label="Redes sociales"
                                active=move || pathname() == RouteId::AdministracionRedes.path()
                            />
                            <SidebarLink
                                target=RouteId::AdministracionNoticias.path()
                                icon="newspaper"
                                label="Noticias"
                                active=move || pathname() == RouteId::AdministracionNoticias.path()
                            />
                            <SidebarLink
                                target=RouteId::AdministracionEmpresa.path()
                                icon="apartment"
                                label="Empresa"
                                active=move || pathname() == RouteId::AdministracionEmpresa.path()
                            />
                        </div>
                    </div>
                </Show>

                // --- Section: Plataforma (super admin only) ---
                <Show when=move || is_super_admin.get()>
                    <div>
                        <h3 class="px-2 text-xs font-semibold text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Plataforma"
                        </h3>
                        <div class="mt-2 space-y-1">
                            <SidebarLink
                                target=RouteId::AdministracionPrefabricadasManager.path()
                                icon="home_work"
                                label="Casas"
                                active=move || {
                                    pathname() == RouteId::AdministracionPrefabricadasManager.path()
                                }
                            />
                            <SidebarLink
                                target=RouteId::AdministracionUsuarios.path()
                                icon="group"
                                label="Usuarios"
                                active=move || pathname() == RouteId::AdministracionUsuarios.path()
                            />
                            <SidebarLink
                                target=RouteId::AdministracionRoles.path()
                                icon="badge"
                                label="Roles"
                                active=move || pathname() == RouteId::AdministracionRoles.path()
                            />
                            <SidebarLink
                                target=RouteId::AdministracionRolesUsuarios.path()
                                icon="assignment_ind"
                                label="Roles de usuarios"
                                active=move || {
                                    pathname() == RouteId::AdministracionRolesUsuarios.path()
                                }
                            />
                        </div>
                    </div>
                </Show>

                // --- Section: Personal ---
                <div>
                    <h3 class="px-2 text-xs font-semibold text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                        "Personal"
                    </h3>
                    <div class="mt-2 space-y-1">
                        <SidebarLink
                            target=RouteId::AdministracionDatosUsuario.path()
                            icon="person"
                            label="Mis datos"
                            active=move || pathname() == RouteId::AdministracionDatosUsuario.path()
                        />
                    </div>
                </div>
            </nav>

            // Footer / Build Info
            <div class="p-4 border-t border-gray-100 dark:border-gray-800">
                <p class="text-[10px] text-gray-400 font-mono text-center uppercase tracking-tighter">
                    {format!("Prefabrica · {commit_short}")}
                </p>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink<F>(
    target: &'static str,
    icon: &'static str,
    label: &'static str,
    active: F,
) -> impl IntoView
where
    F: Fn() -> bool + Clone + Send + Sync + 'static,
{
    let active_1 = active.clone();
    let active_2 = active.clone();
    let active_3 = active.clone();
    let active_4 = active.clone();
    let active_5 = active.clone();
    let active_6 = active.clone();
    let active_7 = active.clone();
    let active_8 = active.clone();
    let active_9 = active.clone();
    let active_10 = active.clone();
    let active_11 = active.clone();
    let active_12 = active.clone();
    let active_13 = active.clone();
    let active_14 = active.clone();

    view! {
        <A
            href=move || target.to_string()
            {..}
            attr:class="group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors"
            class:text-blue-600=move || active_1()
            class:bg-blue-50=move || active_2()
            class:dark:bg-blue-900=move || active_3()
            class:dark:text-blue-400=move || active_4()
            class:text-gray-600=move || !active_5()
            class:dark:text-gray-300=move || !active_6()
            class:hover:bg-gray-50=move || !active_7()
            class:dark:hover:bg-gray-800=move || !active_8()
            class:hover:text-gray-900=move || !active_9()
            class:dark:hover:text-white=move || !active_10()
        >
            <span
                class="material-symbols-outlined mr-3 text-xl transition-colors"
                class:text-blue-600=move || active_11()
                class:dark:text-blue-400=move || active_12()
                class:text-gray-400=move || !active_13()
                class:group-hover:text-gray-900=move || !active_14()
                class:dark:group-hover:text-white=move || {
                    let active = active.clone();
                    !active()
                }
            >
                {icon}
            </span>
            {label}
        </A>
    }
}
