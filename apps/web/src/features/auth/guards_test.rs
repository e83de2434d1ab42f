use super::*;
use crate::features::auth::types::{ADMIN_ROLE, SALES_EXEC_ROLE, SUPER_ADMIN_ROLE};
use session_token::TokenClaims;

fn session_with_roles(roles: &[&str]) -> Session {
    Session::from_token(
        "header.claims.sig",
        TokenClaims {
            usuario_id: "1".to_string(),
            roles: roles.iter().map(ToString::to_string).collect(),
            exp: None,
        },
    )
}

#[test]
fn public_routes_are_always_reachable() {
    let access = RouteAccess::public();

    assert_eq!(
        check_access(&access, &Session::default()),
        NavDecision::Allow
    );
    assert_eq!(
        check_access(&access, &session_with_roles(&[SUPER_ADMIN_ROLE])),
        NavDecision::Allow
    );
}

#[test]
fn public_wins_even_when_auth_is_also_declared() {
    let access = RouteAccess {
        is_public: true,
        requires_auth: true,
        required_roles: &[SUPER_ADMIN_ROLE],
    };

    assert_eq!(
        check_access(&access, &Session::default()),
        NavDecision::Allow
    );
}

#[test]
fn protected_routes_send_visitors_to_login() {
    let access = RouteAccess::authenticated();

    assert_eq!(
        check_access(&access, &Session::default()),
        NavDecision::RedirectToLogin
    );
}

#[test]
fn missing_session_outranks_missing_role() {
    let access = RouteAccess::restricted(&[SUPER_ADMIN_ROLE]);

    assert_eq!(
        check_access(&access, &Session::default()),
        NavDecision::RedirectToLogin
    );
}

#[test]
fn any_single_required_role_grants_access() {
    let access = RouteAccess::restricted(&[SUPER_ADMIN_ROLE, ADMIN_ROLE, SALES_EXEC_ROLE]);

    assert_eq!(
        check_access(&access, &session_with_roles(&[SALES_EXEC_ROLE])),
        NavDecision::Allow
    );
    assert_eq!(
        check_access(&access, &session_with_roles(&["cliente", ADMIN_ROLE])),
        NavDecision::Allow
    );
}

#[test]
fn holding_no_required_role_is_unauthorized() {
    let access = RouteAccess::restricted(&[SUPER_ADMIN_ROLE, ADMIN_ROLE]);

    assert_eq!(
        check_access(&access, &session_with_roles(&["cliente"])),
        NavDecision::RedirectToUnauthorized
    );
}

#[test]
fn admins_do_not_reach_super_admin_routes() {
    let access = RouteAccess::restricted(&[SUPER_ADMIN_ROLE]);

    assert_eq!(
        check_access(&access, &session_with_roles(&[ADMIN_ROLE, SALES_EXEC_ROLE])),
        NavDecision::RedirectToUnauthorized
    );
    assert_eq!(
        check_access(&access, &session_with_roles(&[SUPER_ADMIN_ROLE])),
        NavDecision::Allow
    );
}

#[test]
fn auth_only_routes_accept_any_session() {
    let access = RouteAccess::authenticated();

    assert_eq!(
        check_access(&access, &session_with_roles(&[])),
        NavDecision::Allow
    );
    assert_eq!(
        check_access(&access, &session_with_roles(&["cliente"])),
        NavDecision::Allow
    );
}

#[test]
fn unclassified_routes_fall_through_open() {
    let access = RouteAccess::default();

    assert_eq!(
        check_access(&access, &Session::default()),
        NavDecision::Allow
    );
}

// End-to-end: resolve real paths through the route table before deciding.
#[test]
fn admin_area_decisions_match_the_route_table() {
    let table = route_table();

    let admin_access = table.access(RouteId::from_path("/administracion"));
    assert_eq!(
        check_access(&admin_access, &Session::default()),
        NavDecision::RedirectToLogin
    );
    assert_eq!(
        check_access(&admin_access, &session_with_roles(&[SALES_EXEC_ROLE])),
        NavDecision::Allow
    );

    let users_access = table.access(RouteId::from_path("/administracionUsuarios"));
    assert_eq!(
        check_access(&users_access, &session_with_roles(&[ADMIN_ROLE])),
        NavDecision::RedirectToUnauthorized
    );
    assert_eq!(
        check_access(&users_access, &session_with_roles(&[SUPER_ADMIN_ROLE])),
        NavDecision::Allow
    );

    let home_access = table.access(RouteId::from_path("/"));
    assert_eq!(
        check_access(&home_access, &Session::default()),
        NavDecision::Allow
    );
}
