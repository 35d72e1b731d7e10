use leptos::*;

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4" role="status">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
            <div class="text-xl">{label.unwrap_or_else(|| "Loading...".to_string())}</div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center" role="alert">
            <div class="text-red-500">{message}</div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn feedback_helpers_render_messages() {
        let html = render_to_string(|| {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="Failed to load products" />
                </div>
            }
        });
        assert!(html.contains("Loading..."));
        assert!(html.contains("Failed to load products"));
    }
}
