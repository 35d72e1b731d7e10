use crate::api::ApiError;
use crate::components::error::InlineErrorMessage;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    #[prop(into)] email: Signal<String>,
    #[prop(into)] password: Signal<String>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <form on:submit=move |ev| on_submit.call(ev) class="space-y-4 w-full max-w-md p-8">
                <h1 class="text-2xl font-bold mb-6">"Login"</h1>

                <InlineErrorMessage error=error />

                <div>
                    <label for="email" class="block mb-2">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        class="w-full p-2 border rounded"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| on_email_input.call(event_target_value(&ev))
                    />
                </div>

                <div>
                    <label for="password" class="block mb-2">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        class="w-full p-2 border rounded"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| on_password_input.call(event_target_value(&ev))
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="w-full bg-blue-500 text-white p-2 rounded hover:bg-blue-600 disabled:opacity-50"
                >
                    {move || if pending.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
