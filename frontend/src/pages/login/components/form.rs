use crate::{
    components::common::Button,
    pages::login::{
        components::messages::InlineErrorMessage, utils::LoginErrors, view_model::LoginFormState,
    },
    router::REGISTER_PATH,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    form: LoginFormState,
    #[prop(into)] errors: Signal<LoginErrors>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let common_error = Signal::derive(move || errors.get().common);
    let email_error = Signal::derive(move || errors.get().email);
    let password_error = Signal::derive(move || errors.get().password);

    view! {
        <div class="flex flex-col items-center justify-center h-full">
            <form class="flex flex-col w-96" on:submit=move |ev| on_submit.call(ev)>
                <InlineErrorMessage message=common_error />
                <label for="email" class="text-sm font-semibold">
                    "Email"
                </label>
                <input
                    type="email"
                    name="email"
                    id="email"
                    autocomplete="email"
                    class="border border-gray-300 rounded-md p-2 mt-1"
                    prop:value=move || form.email.get()
                    on:input=move |ev| form.email.set(event_target_value(&ev))
                />
                <InlineErrorMessage message=email_error />
                <label for="password" class="text-sm font-semibold mt-2">
                    "Password"
                </label>
                <input
                    type="password"
                    name="password"
                    id="password"
                    autocomplete="current-password"
                    class="border border-gray-300 rounded-md p-2 mt-1"
                    prop:value=move || form.password.get()
                    on:input=move |ev| form.password.set(event_target_value(&ev))
                />
                <InlineErrorMessage message=password_error />
                <Button kind="submit" class="mt-4" loading=pending>
                    "Login"
                </Button>
            </form>

            <div class="mt-4">
                "Don't have an account? "
                <a href=REGISTER_PATH class="text-blue-500">
                    "Register"
                </a>
            </div>
        </div>
    }
}
