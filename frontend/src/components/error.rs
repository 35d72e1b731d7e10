use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-100 text-red-600 p-3 rounded" role="alert">
                {move || error.get().map(|e| e.error).unwrap_or_default()}
            </div>
        </Show>
    }
}
