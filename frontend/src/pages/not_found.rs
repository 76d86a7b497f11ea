use crate::{components::layout::PageShell, router::LOGIN_PATH};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Not found"/>
        <PageShell>
            <div class="flex flex-col items-center justify-center h-full">
                <p class="text-sm text-gray-600">"This page does not exist."</p>
                <a href=LOGIN_PATH class="mt-4 text-blue-500">
                    "Back to login"
                </a>
            </div>
        </PageShell>
    }
}
