use leptos::*;

#[component]
pub fn InlineErrorMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <div class="text-red-500 text-sm mt-2" role="alert">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
