use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::ApiClient,
    config,
    images::ImagePolicy,
    pages::{home::HomePage, login::LoginPage, products::ProductsPage},
    state::session::Session,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/login", "/products"];

pub fn mount_app() {
    mount_to_body(app_root);
}

fn image_policy() -> ImagePolicy {
    ImagePolicy::new(config::image_hosts()).unwrap_or_else(|err| {
        log::error!("Invalid image host configuration, using defaults: {}", err);
        ImagePolicy::default()
    })
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();

    let session = Session::browser();
    provide_context(session.clone());
    provide_context(ApiClient::new().with_session(session));
    provide_context(image_policy());

    view! {
        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/login" view=LoginPage/>
                <Route path="/products" view=ProductsPage/>
            </Routes>
        </Router>
    }
}
