use super::components::{grid::ProductGrid, pager::Pager};
use super::loader::ViewState;
use super::utils::{page_path, parse_page_param, PagerControls};
use super::view_model::use_products_view_model;
use crate::components::feedback::{ErrorMessage, LoadingSpinner};
use leptos::*;
use leptos_router::{use_navigate, use_query_map};

fn requested_page(query: Memo<leptos_router::ParamsMap>) -> u32 {
    query.with(|q| parse_page_param(q.get("page").map(String::as_str)))
}

/// History entry to push when `page` is picked while `current` is shown.
fn history_target(page: u32, current: u32) -> Option<String> {
    (page != 0 && page != current).then(|| page_path(page))
}

fn render_state(state: ViewState, on_select: Callback<u32>) -> View {
    match state {
        ViewState::Loading => view! { <LoadingSpinner /> }.into_view(),
        ViewState::Error(message) => view! { <ErrorMessage message=message /> }.into_view(),
        ViewState::Ready(page) => {
            let controls = PagerControls::from_meta(&page.meta);
            view! {
                <div class="container mx-auto px-4 py-8">
                    <h1 class="text-3xl font-bold mb-8">"Products"</h1>
                    <ProductGrid products=page.items />
                    <Pager controls=controls on_select=on_select />
                </div>
            }
            .into_view()
        }
    }
}

#[component]
pub fn ProductsPanel() -> impl IntoView {
    let query = use_query_map();
    let vm = use_products_view_model(query.with_untracked(|q| {
        parse_page_param(q.get("page").map(String::as_str))
    }));
    let state = vm.state();

    // Back/forward and direct links land here through the query string.
    create_effect(move |_| {
        vm.select_page(requested_page(query));
    });

    let navigate = use_navigate();
    let on_select = Callback::new(move |page: u32| {
        if let Some(path) = history_target(page, vm.page.get_untracked()) {
            navigate(&path, Default::default());
        }
    });

    view! {
        <section>
            {move || render_state(state.get(), on_select)}
        </section>
    }
}
