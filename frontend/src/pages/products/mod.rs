use leptos::*;
use leptos_meta::Title;

pub mod components;
pub mod loader;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::ProductsPanel;

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <Title text="Products" />
        <ProductsPanel />
    }
}
