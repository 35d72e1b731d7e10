use crate::api::{ApiClient, LoadError, ProductsResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct ProductsRepository {
    client: Rc<ApiClient>,
}

impl ProductsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn fetch_page(&self, page: u32) -> Result<ProductsResponse, LoadError> {
        self.client.list_products(page).await
    }
}
