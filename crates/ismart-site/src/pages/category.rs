//! Category listing with a brand filter

use crate::components::*;
use crate::pages::NotFoundPage;
use ismart_core::catalog::{brands_in, category_by_slug, products_in, Category, Product};
use ismart_core::{CategoryFilter, Selection};
use leptos::*;
use leptos_router::use_params_map;

#[component]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|params| params.get("slug").cloned().unwrap_or_default());
    let category = create_memo(move |_| category_by_slug(&slug()));

    view! {
        {move || match category.get() {
            Some(category) => view! { <CategoryListing category=category/> }.into_view(),
            None => view! { <NotFoundPage/> }.into_view(),
        }}
    }
}

fn product_brand<'a>(product: &'a &'static Product) -> &'a str {
    product.brand
}

#[component]
fn CategoryListing(category: &'static Category) -> impl IntoView {
    // Rebuilt whenever the slug changes, so the brand starts at "all".
    let brand = create_rw_signal(Selection::All);
    let products = products_in(category.slug);
    let brands = brands_in(category.slug);

    let visible = move || {
        let mut filter = CategoryFilter::with_key(&products, product_brand);
        filter.set_category(brand.get());
        filter.filtered().into_iter().copied().collect::<Vec<&'static Product>>()
    };
    let visible = create_memo(move |_| visible());

    let brand_button = move |label: &'static str, selection: Selection| {
        let target = selection.clone();
        let active = move || brand.with(|brand| *brand == target);
        view! {
            <button
                class=move || {
                    if active() {
                        "px-4 py-2 rounded-full bg-emerald-600 text-white text-sm font-medium"
                    } else {
                        "px-4 py-2 rounded-full bg-white border border-gray-200 text-gray-700 text-sm font-medium hover:border-emerald-500"
                    }
                }
                on:click=move |_| brand.set(selection.clone())
            >
                {label}
            </button>
        }
    };

    view! {
        <div>
            <section class="text-white py-16" style=category.visual.background_style()>
                <div class="container mx-auto px-4">
                    <h1 class="text-4xl md:text-5xl font-bold mb-3">{category.name}</h1>
                    <p class="text-xl text-white/80">{category.tagline}</p>
                </div>
            </section>

            <section class="py-12 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="flex flex-wrap items-center gap-2 mb-8">
                        <span class="text-sm text-gray-500 mr-2">"Brand:"</span>
                        {brand_button("All brands", Selection::All)}
                        {brands
                            .into_iter()
                            .map(|name| brand_button(name, Selection::from(name)))
                            .collect_view()}
                    </div>

                    <Show
                        when=move || visible.with(|products| !products.is_empty())
                        fallback=move || view! {
                            <EmptyState
                                message=format!("No {} match this brand right now.", category.name.to_lowercase())
                                on_reset=move || brand.set(Selection::All)
                            />
                        }
                    >
                        <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
                            {move || {
                                visible
                                    .get()
                                    .into_iter()
                                    .map(|product| view! { <ProductCard product=product/> })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </div>
            </section>
        </div>
    }
}
