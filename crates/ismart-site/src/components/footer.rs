//! Site footer with link columns and newsletter signup

use super::forms::{use_form, FormHandle};
use ismart_core::{FormKind, SubmitStatus, ToggleSet};
use leptos::*;
use leptos_router::*;

struct FooterColumn {
    title: &'static str,
    links: &'static [(&'static str, &'static str)],
}

const COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Shop",
        links: &[
            ("/category/smartphones", "Smartphones"),
            ("/category/laptops", "Laptops"),
            ("/category/tablets", "Tablets"),
            ("/category/audio", "Audio"),
        ],
    },
    FooterColumn {
        title: "Company",
        links: &[("/about", "About us"), ("/journal", "Journal"), ("/contact", "Contact")],
    },
    FooterColumn {
        title: "Support",
        links: &[
            ("/help", "Help center"),
            ("/report", "Report content"),
            ("/login", "Sign in"),
        ],
    },
];

#[component]
pub fn Footer() -> impl IntoView {
    // Columns collapse into independent toggles on small screens.
    let expanded = create_rw_signal(ToggleSet::new());

    view! {
        <footer class="bg-gray-900 text-gray-300">
            <div class="container mx-auto px-4 py-12 grid md:grid-cols-4 gap-8">
                {COLUMNS
                    .iter()
                    .enumerate()
                    .map(|(i, column)| {
                        let open = move || expanded.with(|toggles| toggles.is_open(i));
                        view! {
                            <div>
                                <button
                                    class="w-full flex justify-between items-center md:cursor-default text-white font-semibold mb-4"
                                    on:click=move |_| expanded.update(|toggles| {
                                        toggles.toggle(i);
                                    })
                                >
                                    {column.title}
                                    <span class="md:hidden">{move || if open() { "−" } else { "+" }}</span>
                                </button>
                                <ul class=move || if open() { "space-y-2" } else { "space-y-2 hidden md:block" }>
                                    {column
                                        .links
                                        .iter()
                                        .map(|(href, label)| view! {
                                            <li>
                                                <A href=*href class="hover:text-white transition">{*label}</A>
                                            </li>
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
                <NewsletterSignup/>
            </div>
            <div class="border-t border-gray-800">
                <div class="container mx-auto px-4 py-6 text-sm text-gray-500 flex flex-col md:flex-row justify-between gap-2">
                    <span>"© ISmart Refurbished Electronics"</span>
                    <span>"Certified refurbished · 12-month warranty · 30-day returns"</span>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn NewsletterSignup() -> impl IntoView {
    let form: FormHandle = use_form(FormKind::Newsletter);
    let email = move || form.state.with(|state| state.value("email").to_string());
    let error = move || form.state.with(|state| state.error("email").map(str::to_string));
    let done = move || {
        form.state.with(|state| match state.status() {
            SubmitStatus::Succeeded(message) => Some(message.clone()),
            _ => None,
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.submit();
    };

    view! {
        <div>
            <h3 class="text-white font-semibold mb-4">"Stay in the loop"</h3>
            <p class="text-sm mb-4">"New drops, price cuts and repair guides. No spam."</p>
            <Show
                when=move || done().is_none()
                fallback=move || view! { <p class="text-emerald-400 text-sm">{done()}</p> }
            >
                <form on:submit=on_submit class="flex flex-col gap-2" novalidate>
                    <input
                        type="email"
                        aria-label="Email address"
                        placeholder="you@example.com"
                        class="w-full px-4 py-2 rounded-lg bg-gray-800 border border-gray-700 text-white placeholder-gray-500"
                        prop:value=email
                        on:input=move |ev| form.state.update(|state| state.set("email", event_target_value(&ev)))
                    />
                    {move || error().map(|message| view! { <p class="text-sm text-red-400">{message}</p> })}
                    <button
                        type="submit"
                        disabled=move || form.submitting()
                        class="px-4 py-2 bg-emerald-600 hover:bg-emerald-500 disabled:bg-emerald-800 text-white font-medium rounded-lg transition"
                    >
                        {move || if form.submitting() { "Subscribing…" } else { "Subscribe" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
