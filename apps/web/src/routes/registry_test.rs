use super::*;

#[test]
fn every_path_resolves_back_to_its_route() {
    for id in RouteId::ALL {
        let concrete = id.path().replace(":id", "7").replace(":token", "abc123");
        assert_eq!(RouteId::from_path(&concrete), id, "path {concrete}");
    }
}

#[test]
fn from_path_ignores_trailing_slashes() {
    assert_eq!(RouteId::from_path("/blog/"), RouteId::Blog);
    assert_eq!(RouteId::from_path("/administracion/"), RouteId::Administracion);
    assert_eq!(RouteId::from_path("//nosotros"), RouteId::Nosotros);
}

#[test]
fn parameterized_paths_resolve_with_any_value() {
    assert_eq!(
        RouteId::from_path("/prefabricadas/42"),
        RouteId::PrefabricadaDetalle
    );
    assert_eq!(
        RouteId::from_path("/blog/casa-mediterranea"),
        RouteId::BlogDetalle
    );
    assert_eq!(
        RouteId::from_path("/reset-password/dGhpcyBpcyBmaW5l"),
        RouteId::ResetPassword
    );
}

#[test]
fn unknown_paths_resolve_to_not_found() {
    assert_eq!(RouteId::from_path("/admin"), RouteId::NotFound);
    assert_eq!(RouteId::from_path("/administracionX"), RouteId::NotFound);
    assert_eq!(RouteId::from_path("/prefabricadas/1/extra"), RouteId::NotFound);
    assert_eq!(RouteId::from_path("/blog/1/comments"), RouteId::NotFound);
}

#[test]
fn case_differences_are_not_forgiven() {
    // The admin paths are camelCased; a lowercased variant is a different,
    // unknown path.
    assert_eq!(RouteId::from_path("/administraciontipos"), RouteId::NotFound);
}

#[test]
fn public_routes_stay_public_after_stamping() {
    let table = RouteTable::build();

    for id in [
        RouteId::Home,
        RouteId::Login,
        RouteId::Unauthorized,
        RouteId::NotFound,
        RouteId::BlogDetalle,
    ] {
        let access = table.access(id);
        assert!(access.is_public, "{id:?} should be public");
        assert!(!access.requires_auth);
        assert!(access.required_roles.is_empty());
    }
}

#[test]
fn group_roles_overwrite_declared_roles() {
    let table = RouteTable::build();

    // Declared super-admin-only, but listed in the shared admin group.
    let empresa = table.access(RouteId::AdministracionEmpresa);
    assert!(empresa.requires_auth);
    assert_eq!(empresa.required_roles, ADMIN_AREA_ROLES);
}

#[test]
fn shared_admin_pages_admit_the_whole_admin_tier() {
    let table = RouteTable::build();

    let admin = table.access(RouteId::Administracion);
    assert!(!admin.is_public);
    assert!(admin.requires_auth);
    assert_eq!(admin.required_roles, ADMIN_AREA_ROLES);

    let noticias = table.access(RouteId::AdministracionNoticias);
    assert_eq!(noticias.required_roles, ADMIN_AREA_ROLES);
}

#[test]
fn super_admin_pages_stay_super_admin_only() {
    let table = RouteTable::build();

    for id in [
        RouteId::AdministracionPrefabricadasManager,
        RouteId::AdministracionUsuarios,
        RouteId::AdministracionRoles,
        RouteId::AdministracionRolesUsuarios,
    ] {
        let access = table.access(id);
        assert!(access.requires_auth, "{id:?} should require auth");
        assert_eq!(access.required_roles, [SUPER_ADMIN_ROLE], "{id:?}");
    }
}

#[test]
fn profile_page_requires_auth_but_no_role() {
    let table = RouteTable::build();

    let datos = table.access(RouteId::AdministracionDatosUsuario);
    assert!(!datos.is_public);
    assert!(datos.requires_auth);
    assert!(datos.required_roles.is_empty());
}

#[test]
fn every_route_is_classified() {
    let table = RouteTable::build();

    for id in RouteId::ALL {
        let access = table.access(id);
        assert!(
            access.is_public || access.requires_auth,
            "{id:?} is unclassified"
        );
    }
}

#[test]
fn shared_table_is_built_once() {
    let first = route_table() as *const RouteTable;
    let second = route_table() as *const RouteTable;
    assert_eq!(first, second);
}
