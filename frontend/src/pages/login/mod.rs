use crate::components::layout::PageShell;
use leptos::*;
use leptos_meta::{Meta, Title};

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::LoginPanel;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Title text="Login"/>
        <Meta name="description" content="Login page"/>
        <PageShell>
            <LoginPanel />
        </PageShell>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use leptos_meta::provide_meta_context;

    #[test]
    fn login_page_renders_shell_and_form() {
        let html = render_to_string(|| {
            provide_meta_context();
            view! { <LoginPage /> }
        });
        assert!(html.contains("<header"));
        assert!(html.contains("href=\"/login\""));
        assert!(html.contains("id=\"email\""));
        assert!(html.contains("id=\"password\""));
        assert!(html.contains("<footer"));
    }
}
