//! Card components for storefront pages

use ismart_core::catalog::{Product, ValueBlock};
use ismart_core::{Card, Visual};
use leptos::*;

/// Box filled with a [`Visual`] background
#[component]
pub fn VisualBlock(
    visual: Visual,
    #[prop(optional)] sizing: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class=format!("relative overflow-hidden {sizing}") style=visual.background_style()>
            {children.map(|children| children())}
        </div>
    }
}

#[component]
pub fn ContentCard(card: Card) -> impl IntoView {
    let Card { title, subtitle, href, visual, badge } = card;
    let body = view! {
        <div class="group bg-white rounded-xl shadow hover:shadow-lg transition overflow-hidden h-full">
            <VisualBlock visual=visual sizing="h-44">
                {badge.map(|badge| view! {
                    <span class="absolute top-3 left-3 px-2 py-1 text-xs font-semibold bg-emerald-600 text-white rounded">
                        {badge}
                    </span>
                })}
            </VisualBlock>
            <div class="p-5">
                <h3 class="font-semibold text-gray-900 group-hover:text-emerald-700">{title}</h3>
                {subtitle.map(|subtitle| view! { <p class="text-sm text-gray-600 mt-1">{subtitle}</p> })}
            </div>
        </div>
    };

    match href {
        Some(href) => view! { <a href=href class="block h-full">{body}</a> }.into_view(),
        None => body.into_view(),
    }
}

#[component]
pub fn ProductCard(product: &'static Product) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow hover:shadow-lg transition overflow-hidden h-full">
            <VisualBlock visual=product.visual sizing="h-48">
                <Show when=move || { product.discount_percent() > 0 }>
                    <span class="absolute top-3 left-3 px-2 py-1 text-xs font-semibold bg-emerald-600 text-white rounded">
                        {format!("Save {}%", product.discount_percent())}
                    </span>
                </Show>
            </VisualBlock>
            <div class="p-5">
                <p class="text-xs uppercase tracking-wide text-gray-500">{product.brand}</p>
                <h3 class="font-semibold text-gray-900 mt-1">{product.name}</h3>
                <p class="text-sm text-gray-600 mt-1">
                    {format!("{} condition · ★ {:.1}", product.grade.label(), product.rating)}
                </p>
                <div class="mt-3 flex items-baseline gap-2">
                    <span class="text-lg font-bold text-gray-900">{product.price()}</span>
                    <span class="text-sm text-gray-400 line-through">
                        {ismart_core::catalog::format_price(product.original_price_cents)}
                    </span>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ValueCard(value: &'static ValueBlock) -> impl IntoView {
    view! {
        <div class="rounded-xl overflow-hidden shadow">
            <VisualBlock visual=value.visual sizing="h-32"/>
            <div class="p-6 bg-white">
                <h3 class="text-xl font-semibold text-gray-900 mb-2">{value.title}</h3>
                <p class="text-gray-600">{value.body}</p>
            </div>
        </div>
    }
}

#[component]
pub fn StatCard(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-4xl font-bold text-emerald-600">{value}</div>
            <div class="text-gray-600 mt-1">{label}</div>
        </div>
    }
}

#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto text-center mb-12">
            <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">{title}</h2>
            <Show when=move || !subtitle.is_empty()>
                <p class="text-lg text-gray-600">{subtitle}</p>
            </Show>
        </div>
    }
}

/// "No results" state with a reset action
#[component]
pub fn EmptyState<F>(message: String, on_reset: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <div class="text-center py-16 bg-gray-50 rounded-xl">
            <p class="text-gray-600 mb-4">{message}</p>
            <button
                class="px-5 py-2 bg-emerald-600 hover:bg-emerald-700 text-white font-medium rounded-lg transition"
                on:click=move |_| on_reset()
            >
                "Show all"
            </button>
        </div>
    }
}
