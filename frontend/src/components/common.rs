use leptos::*;

#[component]
pub fn Button(
    #[prop(default = "button")] kind: &'static str,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=kind
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md p-2 bg-gray-900 hover:bg-gray-700 text-white transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {}",
                    class
                )
            }
            disabled=move || loading.get()
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn button_renders_requested_type() {
        let html = render_to_string(|| view! { <Button kind="submit">"Go"</Button> });
        assert!(html.contains("type=\"submit\""));
        assert!(html.contains("Go"));
        assert!(html.contains("bg-gray-900"));
        assert!(!html.contains("animate-spin"));
    }

    #[test]
    fn loading_button_shows_spinner() {
        let html = render_to_string(|| view! { <Button loading=true>"Go"</Button> });
        assert!(html.contains("animate-spin"));
    }

    #[test]
    fn button_defaults_to_plain_button() {
        let html = render_to_string(|| view! { <Button>"Go"</Button> });
        assert!(html.contains("type=\"button\""));
    }
}
