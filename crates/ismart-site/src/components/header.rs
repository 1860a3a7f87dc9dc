//! Site header and navigation

use ismart_core::catalog::CATEGORIES;
use leptos::*;
use leptos_router::*;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/about", "About"),
    ("/journal", "Journal"),
    ("/help", "Help"),
    ("/contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (mobile_open, set_mobile_open) = create_signal(false);
    let (shop_open, set_shop_open) = create_signal(false);

    // Close menus after navigating.
    let location = use_location();
    create_effect(move |_| {
        location.pathname.with(|_| ());
        set_mobile_open.set(false);
        set_shop_open.set(false);
    });

    view! {
        <header class="bg-white shadow-sm sticky top-0 z-50">
            <div class="bg-emerald-700 text-white text-sm text-center py-2">
                "Free shipping, 30-day returns and a 12-month warranty on every device"
            </div>
            <nav class="container mx-auto px-4">
                <div class="flex justify-between h-16">
                    <div class="flex items-center">
                        <A href="/" class="flex items-center">
                            <span class="text-2xl font-extrabold tracking-tight text-gray-900">"i"</span>
                            <span class="text-2xl font-extrabold tracking-tight text-emerald-600">"Smart"</span>
                        </A>
                    </div>

                    <div class="hidden md:flex items-center space-x-8">
                        <div
                            class="relative"
                            on:mouseenter=move |_| set_shop_open.set(true)
                            on:mouseleave=move |_| set_shop_open.set(false)
                        >
                            <button class="text-gray-600 hover:text-gray-900 transition">"Shop ▾"</button>
                            <Show when=move || shop_open.get()>
                                <div class="absolute left-0 top-full w-56 bg-white rounded-lg shadow-lg py-2">
                                    {CATEGORIES
                                        .iter()
                                        .map(|category| view! {
                                            <A
                                                href=format!("/category/{}", category.slug)
                                                class="block px-4 py-2 text-gray-700 hover:bg-gray-50"
                                            >
                                                {category.name}
                                            </A>
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| view! {
                                <A href=*href class="text-gray-600 hover:text-gray-900 transition">{*label}</A>
                            })
                            .collect_view()}
                        <A
                            href="/login"
                            class="px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white font-medium rounded-lg transition"
                        >
                            "Sign in"
                        </A>
                    </div>

                    <div class="md:hidden flex items-center">
                        <button
                            aria-label="Toggle menu"
                            class="p-2 rounded-md text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                            on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                        >
                            <Show
                                when=move || mobile_open.get()
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>
            </nav>

            <Show when=move || mobile_open.get()>
                <div class="md:hidden border-t border-gray-200">
                    <div class="px-4 py-4 space-y-3">
                        <p class="text-xs uppercase tracking-wide text-gray-400">"Shop"</p>
                        {CATEGORIES
                            .iter()
                            .map(|category| view! {
                                <A href=format!("/category/{}", category.slug) class="block text-gray-600 hover:text-gray-900">
                                    {category.name}
                                </A>
                            })
                            .collect_view()}
                        <div class="pt-4 border-t border-gray-200 space-y-3">
                            {NAV_LINKS
                                .iter()
                                .map(|(href, label)| view! {
                                    <A href=*href class="block text-gray-600 hover:text-gray-900">{*label}</A>
                                })
                                .collect_view()}
                            <A
                                href="/login"
                                class="block w-full text-center px-4 py-2 bg-emerald-600 text-white font-medium rounded-lg"
                            >
                                "Sign in"
                            </A>
                        </div>
                    </div>
                </div>
            </Show>
        </header>
    }
}
