use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::pages::{login::LoginPage, not_found::NotFoundPage};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const REGISTER_PATH: &str = "/register";

/// Paths this app renders itself.
pub const ROUTE_PATHS: &[&str] = &[HOME_PATH, LOGIN_PATH];

/// Paths reached through full page navigation and served elsewhere.
pub const EXTERNAL_PATHS: &[&str] = &[DASHBOARD_PATH, REGISTER_PATH];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <Router>
            <Routes>
                <Route path=HOME_PATH view=|| view! { <Redirect path=LOGIN_PATH/> }/>
                <Route path=LOGIN_PATH view=LoginPage/>
                <Route path="/*any" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}
