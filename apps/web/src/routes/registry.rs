//! The route registry: every navigable route, its path pattern, and its
//! access rules. Routes declare their own classification (public,
//! authenticated, role-restricted); role groups are then stamped over
//! their member routes when the table is built, and the stamped table is
//! what the navigation guard consults. A group's roles replace whatever
//! the route declared for itself, so group membership is the one place to
//! look when auditing who can reach an admin page.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use crate::features::auth::types::{ADMIN_ROLE, SALES_EXEC_ROLE, SUPER_ADMIN_ROLE};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Roles admitted to the shared administration pages. Sales executives
/// are included on purpose; content management is part of their job.
pub const ADMIN_AREA_ROLES: &[&str] = &[SUPER_ADMIN_ROLE, ADMIN_ROLE, SALES_EXEC_ROLE];

const SUPER_ADMIN_ONLY: &[&str] = &[SUPER_ADMIN_ROLE];

/// Identifies every route the app can navigate to. Using an enum keeps
/// navigation targets and access rules checked at compile time instead of
/// spread around as path strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RouteId {
    Home,
    Nosotros,
    Prefabricadas,
    PrefabricadaDetalle,
    Contactos,
    Blog,
    BlogDetalle,
    Login,
    RecuperarContrasena,
    ResetPassword,
    Unauthorized,
    NotFound,
    Administracion,
    AdministracionTipos,
    AdministracionCategorias,
    AdministracionEstilos,
    AdministracionEmpresa,
    AdministracionPrefabricadasManager,
    AdministracionPortadas,
    AdministracionServicios,
    AdministracionRedes,
    AdministracionUsuarios,
    AdministracionRoles,
    AdministracionRolesUsuarios,
    AdministracionNoticias,
    AdministracionDatosUsuario,
}

impl RouteId {
    pub const ALL: [RouteId; 26] = [
        RouteId::Home,
        RouteId::Nosotros,
        RouteId::Prefabricadas,
        RouteId::PrefabricadaDetalle,
        RouteId::Contactos,
        RouteId::Blog,
        RouteId::BlogDetalle,
        RouteId::Login,
        RouteId::RecuperarContrasena,
        RouteId::ResetPassword,
        RouteId::Unauthorized,
        RouteId::NotFound,
        RouteId::Administracion,
        RouteId::AdministracionTipos,
        RouteId::AdministracionCategorias,
        RouteId::AdministracionEstilos,
        RouteId::AdministracionEmpresa,
        RouteId::AdministracionPrefabricadasManager,
        RouteId::AdministracionPortadas,
        RouteId::AdministracionServicios,
        RouteId::AdministracionRedes,
        RouteId::AdministracionUsuarios,
        RouteId::AdministracionRoles,
        RouteId::AdministracionRolesUsuarios,
        RouteId::AdministracionNoticias,
        RouteId::AdministracionDatosUsuario,
    ];

    /// The route's path pattern. Parameterized routes use `:name` segments;
    /// the admin paths are flat and camelCased because published links to
    /// them predate this app.
    pub const fn path(self) -> &'static str {
        match self {
            RouteId::Home => "/",
            RouteId::Nosotros => "/nosotros",
            RouteId::Prefabricadas => "/prefabricadas",
            RouteId::PrefabricadaDetalle => "/prefabricadas/:id",
            RouteId::Contactos => "/contactos",
            RouteId::Blog => "/blog",
            RouteId::BlogDetalle => "/blog/:id",
            RouteId::Login => "/login",
            RouteId::RecuperarContrasena => "/recuperar-contrasena",
            RouteId::ResetPassword => "/reset-password/:token",
            RouteId::Unauthorized => "/unauthorized",
            RouteId::NotFound => "/*any",
            RouteId::Administracion => "/administracion",
            RouteId::AdministracionTipos => "/administracionTipos",
            RouteId::AdministracionCategorias => "/administracionCategorias",
            RouteId::AdministracionEstilos => "/administracionEstilos",
            RouteId::AdministracionEmpresa => "/administracionEmpresa",
            RouteId::AdministracionPrefabricadasManager => "/administracionPrefabricadasManager",
            RouteId::AdministracionPortadas => "/administracionPortadas",
            RouteId::AdministracionServicios => "/administracionServicios",
            RouteId::AdministracionRedes => "/administracionRedes",
            RouteId::AdministracionUsuarios => "/administracionUsuarios",
            RouteId::AdministracionRoles => "/administracionRoles",
            RouteId::AdministracionRolesUsuarios => "/administracionRolesUsuarios",
            RouteId::AdministracionNoticias => "/administracionNoticias",
            RouteId::AdministracionDatosUsuario => "/administracionDatosUsuario",
        }
    }

    /// Resolves a concrete browser path to its route. Unknown paths resolve
    /// to [`RouteId::NotFound`], which is public, so resolution never blocks
    /// navigation. Trailing slashes and duplicate separators are ignored.
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => RouteId::Home,
            ["nosotros"] => RouteId::Nosotros,
            ["prefabricadas"] => RouteId::Prefabricadas,
            ["prefabricadas", _] => RouteId::PrefabricadaDetalle,
            ["contactos"] => RouteId::Contactos,
            ["blog"] => RouteId::Blog,
            ["blog", _] => RouteId::BlogDetalle,
            ["login"] => RouteId::Login,
            ["recuperar-contrasena"] => RouteId::RecuperarContrasena,
            ["reset-password", _] => RouteId::ResetPassword,
            ["unauthorized"] => RouteId::Unauthorized,
            ["administracion"] => RouteId::Administracion,
            ["administracionTipos"] => RouteId::AdministracionTipos,
            ["administracionCategorias"] => RouteId::AdministracionCategorias,
            ["administracionEstilos"] => RouteId::AdministracionEstilos,
            ["administracionEmpresa"] => RouteId::AdministracionEmpresa,
            ["administracionPrefabricadasManager"] => RouteId::AdministracionPrefabricadasManager,
            ["administracionPortadas"] => RouteId::AdministracionPortadas,
            ["administracionServicios"] => RouteId::AdministracionServicios,
            ["administracionRedes"] => RouteId::AdministracionRedes,
            ["administracionUsuarios"] => RouteId::AdministracionUsuarios,
            ["administracionRoles"] => RouteId::AdministracionRoles,
            ["administracionRolesUsuarios"] => RouteId::AdministracionRolesUsuarios,
            ["administracionNoticias"] => RouteId::AdministracionNoticias,
            ["administracionDatosUsuario"] => RouteId::AdministracionDatosUsuario,
            _ => RouteId::NotFound,
        }
    }

    /// Access rules as declared on the route itself, before role groups are
    /// stamped. The guard never reads these directly; it reads the stamped
    /// [`RouteTable`].
    fn declared_access(self) -> RouteAccess {
        match self {
            RouteId::Home
            | RouteId::Nosotros
            | RouteId::Prefabricadas
            | RouteId::PrefabricadaDetalle
            | RouteId::Contactos
            | RouteId::Blog
            | RouteId::BlogDetalle
            | RouteId::Login
            | RouteId::RecuperarContrasena
            | RouteId::ResetPassword
            | RouteId::Unauthorized
            | RouteId::NotFound => RouteAccess::public(),
            RouteId::Administracion
            | RouteId::AdministracionTipos
            | RouteId::AdministracionCategorias
            | RouteId::AdministracionEstilos
            | RouteId::AdministracionPrefabricadasManager
            | RouteId::AdministracionPortadas
            | RouteId::AdministracionServicios
            | RouteId::AdministracionRedes
            | RouteId::AdministracionNoticias
            | RouteId::AdministracionDatosUsuario => RouteAccess::authenticated(),
            RouteId::AdministracionEmpresa
            | RouteId::AdministracionUsuarios
            | RouteId::AdministracionRoles
            | RouteId::AdministracionRolesUsuarios => RouteAccess::restricted(SUPER_ADMIN_ONLY),
        }
    }
}

/// Access classification for one route. The default is unclassified:
/// neither public nor protected, which the guard treats as open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteAccess {
    pub is_public: bool,
    pub requires_auth: bool,
    pub required_roles: &'static [&'static str],
}

impl RouteAccess {
    pub const fn public() -> Self {
        Self {
            is_public: true,
            requires_auth: false,
            required_roles: &[],
        }
    }

    pub const fn authenticated() -> Self {
        Self {
            is_public: false,
            requires_auth: true,
            required_roles: &[],
        }
    }

    pub const fn restricted(roles: &'static [&'static str]) -> Self {
        Self {
            is_public: false,
            requires_auth: true,
            required_roles: roles,
        }
    }
}

/// A set of roles granted over a set of routes in one declaration.
pub struct RoleGroup {
    pub roles: &'static [&'static str],
    pub routes: &'static [RouteId],
}

/// Role groups stamped onto routes when the table is built. Stamping
/// replaces the member route's own required roles, so a route listed here
/// is governed by the group even if it declared something stricter.
pub const ROLE_GROUPS: &[RoleGroup] = &[
    RoleGroup {
        roles: ADMIN_AREA_ROLES,
        routes: &[
            RouteId::Administracion,
            RouteId::AdministracionTipos,
            RouteId::AdministracionCategorias,
            RouteId::AdministracionEstilos,
            RouteId::AdministracionEmpresa,
            RouteId::AdministracionPortadas,
            RouteId::AdministracionServicios,
            RouteId::AdministracionRedes,
            RouteId::AdministracionNoticias,
        ],
    },
    RoleGroup {
        roles: SUPER_ADMIN_ONLY,
        routes: &[
            RouteId::AdministracionPrefabricadasManager,
            RouteId::AdministracionUsuarios,
            RouteId::AdministracionRoles,
            RouteId::AdministracionRolesUsuarios,
        ],
    },
];

/// The stamped access table the guard consults.
pub struct RouteTable {
    access: BTreeMap<RouteId, RouteAccess>,
}

impl RouteTable {
    /// Builds the table: every route starts from its declared rules, then
    /// each role group marks its member routes as requiring auth and
    /// overwrites their required roles. Group membership alone is enough to
    /// protect a route.
    pub fn build() -> Self {
        let mut access = BTreeMap::new();
        for id in RouteId::ALL {
            access.insert(id, id.declared_access());
        }
        for group in ROLE_GROUPS {
            for id in group.routes {
                if let Some(entry) = access.get_mut(id) {
                    entry.requires_auth = true;
                    entry.required_roles = group.roles;
                }
            }
        }
        Self { access }
    }

    /// Access rules for a route. Routes missing from the table count as
    /// unclassified.
    pub fn access(&self, id: RouteId) -> RouteAccess {
        self.access.get(&id).copied().unwrap_or_default()
    }
}

/// Shared table, built once on first use.
pub fn route_table() -> &'static RouteTable {
    static TABLE: OnceLock<RouteTable> = OnceLock::new();
    TABLE.get_or_init(RouteTable::build)
}
