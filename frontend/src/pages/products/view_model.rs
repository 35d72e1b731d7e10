use super::loader::{PageLoader, RequestToken, ViewState};
use super::repository::ProductsRepository;
use crate::api::ApiClient;
use crate::utils::scroll::scroll_to_top;
use leptos::*;

#[derive(Clone, Copy)]
pub struct ProductsViewModel {
    pub page: RwSignal<u32>,
    pub loader: RwSignal<PageLoader>,
    repository: StoredValue<ProductsRepository>,
}

/// Builds the view model and starts loading `initial_page`.
pub fn use_products_view_model(initial_page: u32) -> ProductsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = ProductsViewModel::new(ProductsRepository::new(api), initial_page);
    vm.load_page(vm.page.get_untracked());
    vm
}

impl ProductsViewModel {
    pub fn new(repository: ProductsRepository, initial_page: u32) -> Self {
        Self {
            page: create_rw_signal(initial_page.max(1)),
            loader: create_rw_signal(PageLoader::default()),
            repository: store_value(repository),
        }
    }

    pub fn state(&self) -> Signal<ViewState> {
        let loader = self.loader;
        Signal::derive(move || loader.with(|l| l.state().clone()))
    }

    /// Moves to Loading right away and settles once the fetch completes.
    pub fn load_page(&self, page: u32) {
        let loader = self.loader;
        let Some(token) = loader.try_update(|l| l.begin()) else {
            return;
        };
        let repository = self.repository.get_value();
        spawn_local(async move {
            fetch_into(loader, &repository, token, page).await;
        });
    }

    /// Switches to `page` and fetches it. Returns `false` when `page` is
    /// already the requested page.
    pub fn select_page(&self, page: u32) -> bool {
        if page == 0 || page == self.page.get_untracked() {
            return false;
        }
        self.page.set(page);
        scroll_to_top();
        self.load_page(page);
        true
    }
}

/// Runs one fetch cycle for `page`. Returns whether the response was applied.
pub async fn load_into(
    loader: RwSignal<PageLoader>,
    repository: &ProductsRepository,
    page: u32,
) -> bool {
    let Some(token) = loader.try_update(|l| l.begin()) else {
        return false;
    };
    fetch_into(loader, repository, token, page).await
}

async fn fetch_into(
    loader: RwSignal<PageLoader>,
    repository: &ProductsRepository,
    token: RequestToken,
    page: u32,
) -> bool {
    let result = repository.fetch_page(page).await;
    loader
        .try_update(|l| l.settle(token, result))
        .unwrap_or(false)
}
