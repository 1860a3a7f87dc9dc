//! Breadcrumb trail and document title for the current route

use ismart_core::SiteRoute;
use leptos::*;
use leptos_meta::Title;
use leptos_router::*;

#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let location = use_location();
    let route = create_memo(move |_| SiteRoute::parse(&location.pathname.get()));

    view! {
        <Title text=move || route.get().document_title()/>
        <Show when=move || route.with(|route| !route.breadcrumbs().is_empty())>
            <nav aria-label="Breadcrumb" class="bg-gray-50 border-b border-gray-100">
                <ol class="container mx-auto px-4 py-3 flex flex-wrap items-center gap-2 text-sm">
                    {move || {
                        route
                            .get()
                            .breadcrumbs()
                            .into_iter()
                            .enumerate()
                            .map(|(i, crumb)| {
                                let separator = (i > 0).then(|| view! { <span class="text-gray-400">"›"</span> });
                                let item = match crumb.href {
                                    Some(href) => view! {
                                        <A href=href class="text-gray-600 hover:text-emerald-700">{crumb.label}</A>
                                    }
                                    .into_view(),
                                    None => view! {
                                        <span aria-current="page" class="text-gray-900 font-medium">{crumb.label}</span>
                                    }
                                    .into_view(),
                                };
                                view! { <li class="flex items-center gap-2">{separator}{item}</li> }
                            })
                            .collect_view()
                    }}
                </ol>
            </nav>
        </Show>
    }
}
