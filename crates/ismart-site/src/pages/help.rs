//! Help center page

use crate::components::*;
use ismart_core::catalog::{faq_topics, FAQS};
use ismart_core::{Accordion, CategoryFilter, Selection};
use leptos::*;

#[component]
pub fn HelpPage() -> impl IntoView {
    let filter = create_rw_signal(CategoryFilter::new(FAQS));
    // First question starts expanded.
    let accordion = create_rw_signal(Accordion::new(Some(0)));

    let select_topic = move |selection: Selection| {
        filter.update(|filter| filter.set_category(selection));
        accordion.set(Accordion::new(Some(0)));
    };

    let topic_button = move |label: &'static str, selection: Selection| {
        let target = selection.clone();
        let is_active = move || filter.with(|filter| *filter.active() == target);
        view! {
            <button
                class=move || {
                    if is_active() {
                        "px-4 py-2 rounded-full bg-emerald-600 text-white text-sm font-medium"
                    } else {
                        "px-4 py-2 rounded-full bg-gray-100 text-gray-700 text-sm font-medium hover:bg-gray-200"
                    }
                }
                on:click=move |_| select_topic(selection.clone())
            >
                {label}
            </button>
        }
    };

    view! {
        <div>
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white py-16">
                <div class="container mx-auto px-4 text-center">
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">"How can we help?"</h1>
                    <p class="text-xl text-gray-300">"Answers to the questions we hear most."</p>
                </div>
            </section>

            <section class="py-16 bg-white">
                <div class="container mx-auto px-4 max-w-3xl">
                    <div class="flex flex-wrap gap-2 mb-8">
                        {topic_button("All topics", Selection::All)}
                        {faq_topics()
                            .into_iter()
                            .map(|topic| topic_button(topic, Selection::from(topic)))
                            .collect_view()}
                    </div>

                    <div class="divide-y divide-gray-200 border-y border-gray-200">
                        {move || {
                            filter
                                .with(|filter| filter.filtered())
                                .into_iter()
                                .enumerate()
                                .map(|(i, faq)| {
                                    let open = move || accordion.with(|accordion| accordion.is_open(i));
                                    view! {
                                        <div>
                                            <button
                                                class="w-full flex justify-between items-center py-5 text-left"
                                                aria-expanded=move || open().to_string()
                                                on:click=move |_| accordion.update(|accordion| {
                                                    accordion.toggle(i);
                                                })
                                            >
                                                <span class="font-medium text-gray-900">{faq.question}</span>
                                                <span class="text-emerald-600 text-xl">{move || if open() { "−" } else { "+" }}</span>
                                            </button>
                                            <Show when=open>
                                                <p class="pb-5 text-gray-600">{faq.answer}</p>
                                            </Show>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </section>

            <section class="py-16 bg-gray-50">
                <div class="container mx-auto px-4 grid md:grid-cols-2 gap-6 max-w-4xl">
                    <div class="bg-white rounded-xl shadow p-8">
                        <h2 class="text-xl font-semibold text-gray-900 mb-2">"Still need help?"</h2>
                        <p class="text-gray-600 mb-4">"Our support team replies within one business day."</p>
                        <a href="/contact" class="text-emerald-700 hover:text-emerald-900 font-medium">"Contact us →"</a>
                    </div>
                    <div class="bg-white rounded-xl shadow p-8">
                        <h2 class="text-xl font-semibold text-gray-900 mb-2">"Spotted something wrong?"</h2>
                        <p class="text-gray-600 mb-4">"Report illegal or misleading content on our store."</p>
                        <a href="/report" class="text-emerald-700 hover:text-emerald-900 font-medium">"Report content →"</a>
                    </div>
                </div>
            </section>
        </div>
    }
}
