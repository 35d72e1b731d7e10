use crate::api::{LoadError, PaginationMeta, Product, ProductsResponse};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load products";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub meta: PaginationMeta,
}

impl From<ProductsResponse> for ProductPage {
    fn from(response: ProductsResponse) -> Self {
        Self {
            items: response.data,
            meta: response.meta,
        }
    }
}

/// What the product list currently displays. Exactly one variant at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Error(String),
    Ready(ProductPage),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn page(&self) -> Option<&ProductPage> {
        match self {
            ViewState::Ready(page) => Some(page),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Fetch lifecycle of the product list.
///
/// Each load is tagged with a fresh token; only the response carrying the
/// most recently issued token may settle the state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLoader {
    issued: u64,
    state: ViewState,
}

impl PageLoader {
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn latest(&self) -> Option<RequestToken> {
        (self.issued > 0).then_some(RequestToken(self.issued))
    }

    pub fn begin(&mut self) -> RequestToken {
        self.issued += 1;
        self.state = ViewState::Loading;
        RequestToken(self.issued)
    }

    /// Returns `false` when the response was superseded and dropped.
    pub fn settle(
        &mut self,
        token: RequestToken,
        result: Result<ProductsResponse, LoadError>,
    ) -> bool {
        if token.0 != self.issued {
            log::debug!(
                "Discarding stale product response (token {}, latest {})",
                token.0,
                self.issued
            );
            return false;
        }
        self.state = match result {
            Ok(response) => ViewState::Ready(response.into()),
            Err(err) => {
                log::error!("Failed to load products ({:?}): {}", err.kind(), err);
                ViewState::Error(LOAD_FAILED_MESSAGE.to_string())
            }
        };
        true
    }
}
