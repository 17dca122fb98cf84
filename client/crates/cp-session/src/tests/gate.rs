use crate::{Route, ScreenGraph, select_graph};

use cp_core::ProfileRecord;

#[test]
fn given_resolving_session_when_selected_then_splash() {
    assert_eq!(select_graph(true, true, true), ScreenGraph::Splash);
    assert_eq!(select_graph(true, false, true), ScreenGraph::Splash);
}

#[test]
fn given_splash_not_done_when_selected_then_splash() {
    assert_eq!(select_graph(false, true, false), ScreenGraph::Splash);
}

#[test]
fn given_resolved_with_identity_when_selected_then_authenticated() {
    assert_eq!(select_graph(false, true, true), ScreenGraph::Authenticated);
}

#[test]
fn given_resolved_without_identity_when_selected_then_unauthenticated() {
    assert_eq!(select_graph(false, false, true), ScreenGraph::Unauthenticated);
}

#[test]
fn given_graphs_when_entered_then_entry_routes() {
    assert_eq!(ScreenGraph::Splash.entry(), Route::Splash);
    assert_eq!(ScreenGraph::Unauthenticated.entry(), Route::Login);
    assert_eq!(ScreenGraph::Authenticated.entry(), Route::Home);
}

#[test]
fn given_edit_route_with_profile_when_checked_then_belongs_to_authenticated_only() {
    let route = Route::EditProfile {
        profile: Some(ProfileRecord {
            name: "Ana".into(),
            degree_title: "BSc".into(),
            graduation_year: Some(2020),
            email: None,
            created_at: None,
            updated_at: None,
        }),
    };

    assert!(ScreenGraph::Authenticated.contains(&route));
    assert!(!ScreenGraph::Unauthenticated.contains(&route));
    assert!(!ScreenGraph::Splash.contains(&route));
}
