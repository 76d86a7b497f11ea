use crate::router::LOGIN_PATH;
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center h-16">
                    <a href=LOGIN_PATH class="text-xl font-semibold text-gray-900">
                        <span>"Login"</span>
                    </a>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-gray-200 py-4 text-center text-sm text-gray-500">
            "Portal"
        </footer>
    }
}

/// Header, centred content area and footer around a page body.
#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <Header/>
            <main class="flex-1 py-12 px-4">
                {children()}
            </main>
            <Footer/>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn page_shell_wraps_children_between_header_and_footer() {
        let html = render_to_string(|| {
            view! {
                <PageShell>
                    <p>"body"</p>
                </PageShell>
            }
        });
        let header = html.find("<header").expect("header");
        let body = html.find("body</p>").expect("children");
        let footer = html.find("<footer").expect("footer");
        assert!(header < body && body < footer);
        assert!(html.contains("href=\"/login\""));
    }
}
