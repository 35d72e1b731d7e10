use crate::state::session::use_session;
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let signed_in = create_rw_signal(session.is_authenticated());

    let sign_out = move |_: ev::MouseEvent| {
        session.sign_out();
        signed_in.set(false);
    };

    view! {
        <Title text="Project Store" />
        <main class="min-h-screen flex flex-col items-center justify-center">
            <h1 class="text-3xl font-bold mb-8">"Project Store"</h1>
            <nav>
                <ul class="space-y-4">
                    <li>
                        <a href="/login" class="text-blue-500 hover:text-blue-700 text-xl">"Login"</a>
                    </li>
                    <li>
                        <a href="/products" class="text-blue-500 hover:text-blue-700 text-xl">"Products"</a>
                    </li>
                </ul>
            </nav>
            <Show when=move || signed_in.get() fallback=|| ()>
                <div class="mt-8 flex items-center gap-4 text-sm text-gray-600">
                    <span>"Signed in"</span>
                    <button class="text-blue-500 hover:text-blue-700" on:click=sign_out.clone()>
                        "Sign out"
                    </button>
                </div>
            </Show>
        </main>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::Session;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn home_page_links_to_login_and_products() {
        let html = render_to_string(|| view! { <HomePage /> });
        assert!(html.contains("Project Store"));
        assert!(html.contains("href=\"/login\""));
        assert!(html.contains("href=\"/products\""));
        assert!(!html.contains("Sign out"));
    }

    #[test]
    fn home_page_offers_sign_out_with_session_token() {
        let html = render_to_string(|| {
            let session = Session::in_memory();
            session.sign_in("abc").unwrap();
            provide_context(session);
            view! { <HomePage /> }
        });
        assert!(html.contains("Signed in"));
        assert!(html.contains("Sign out"));
    }
}
