mod admin;
mod login;
mod not_found;
mod password;
mod public;
pub mod registry;
mod unauthorized;

pub use admin::{
    AdministracionCategoriasPage, AdministracionDatosUsuarioPage, AdministracionEmpresaPage,
    AdministracionEstilosPage, AdministracionNoticiasPage, AdministracionPage,
    AdministracionPortadasPage, AdministracionPrefabricadasManagerPage, AdministracionRedesPage,
    AdministracionRolesPage, AdministracionRolesUsuariosPage, AdministracionServiciosPage,
    AdministracionTiposPage, AdministracionUsuariosPage,
};
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use password::{RecuperarContrasenaPage, ResetPasswordPage};
pub use public::{
    BlogDetallePage, BlogPage, ContactosPage, HomePage, NosotrosPage, PrefabricadaDetallePage,
    PrefabricadasPage,
};
pub use unauthorized::UnauthorizedPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

// Path literals below must stay in sync with `registry::RouteId::path`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/nosotros") view=NosotrosPage />
            <Route path=path!("/prefabricadas") view=PrefabricadasPage />
            <Route path=path!("/prefabricadas/:id") view=PrefabricadaDetallePage />
            <Route path=path!("/contactos") view=ContactosPage />
            <Route path=path!("/blog") view=BlogPage />
            <Route path=path!("/blog/:id") view=BlogDetallePage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/recuperar-contrasena") view=RecuperarContrasenaPage />
            <Route path=path!("/reset-password/:token") view=ResetPasswordPage />
            <Route path=path!("/unauthorized") view=UnauthorizedPage />
            <Route path=path!("/administracion") view=AdministracionPage />
            <Route path=path!("/administracionTipos") view=AdministracionTiposPage />
            <Route path=path!("/administracionCategorias") view=AdministracionCategoriasPage />
            <Route path=path!("/administracionEstilos") view=AdministracionEstilosPage />
            <Route path=path!("/administracionEmpresa") view=AdministracionEmpresaPage />
            <Route
                path=path!("/administracionPrefabricadasManager")
                view=AdministracionPrefabricadasManagerPage
            />
            <Route path=path!("/administracionPortadas") view=AdministracionPortadasPage />
            <Route path=path!("/administracionServicios") view=AdministracionServiciosPage />
            <Route path=path!("/administracionRedes") view=AdministracionRedesPage />
            <Route path=path!("/administracionUsuarios") view=AdministracionUsuariosPage />
            <Route path=path!("/administracionRoles") view=AdministracionRolesPage />
            <Route path=path!("/administracionRolesUsuarios") view=AdministracionRolesUsuariosPage />
            <Route path=path!("/administracionNoticias") view=AdministracionNoticiasPage />
            <Route path=path!("/administracionDatosUsuario") view=AdministracionDatosUsuarioPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
