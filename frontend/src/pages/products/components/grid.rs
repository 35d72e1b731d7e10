use crate::api::Product;
use crate::components::empty_state::EmptyState;
use crate::images::ImagePolicy;
use crate::pages::products::utils::product_path;
use leptos::*;

#[component]
pub fn ProductGrid(products: Vec<Product>) -> impl IntoView {
    let policy = use_context::<ImagePolicy>().unwrap_or_default();

    if products.is_empty() {
        return view! {
            <EmptyState title="No products found" description="There is nothing on this page yet." />
        }
        .into_view();
    }

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 mb-8">
            {products
                .into_iter()
                .map(|product| view! { <ProductCard product=product policy=policy.clone() /> })
                .collect_view()}
        </div>
    }
    .into_view()
}

#[component]
fn ProductCard(product: Product, policy: ImagePolicy) -> impl IntoView {
    let href = product_path(&product.slug);
    let image = match policy.resolve(&product.image) {
        Ok(url) => view! {
            <img
                src=url.to_string()
                alt=product.name.clone()
                class="h-full w-full object-cover"
                loading="lazy"
            />
        }
        .into_view(),
        Err(err) => {
            log::warn!("Not rendering image for product {}: {}", product.id, err);
            view! { <div class="h-full w-full bg-gray-100" aria-hidden="true"></div> }.into_view()
        }
    };

    view! {
        <a href=href class="block hover:shadow-lg transition-shadow duration-300" data-product-id=product.id>
            <div class="border rounded-lg overflow-hidden bg-white">
                <div class="relative h-48 w-full">{image}</div>
                <div class="p-4">
                    <h2 class="text-xl font-semibold mb-2">{product.name}</h2>
                    <p class="text-gray-600 line-clamp-2">{product.description}</p>
                </div>
            </div>
        </a>
    }
}
