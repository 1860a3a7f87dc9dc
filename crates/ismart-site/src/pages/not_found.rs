use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <section class="py-24 bg-white">
            <div class="container mx-auto px-4 text-center">
                <p class="text-6xl font-bold text-emerald-600 mb-4">"404"</p>
                <h1 class="text-3xl font-bold text-gray-900 mb-4">"Page not found"</h1>
                <p class="text-gray-600 mb-8">"The page you're looking for has moved or never existed."</p>
                <a href="/" class="inline-block px-6 py-3 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg font-semibold">
                    "Back to the store"
                </a>
            </div>
        </section>
    }
}
