//! Home page

use crate::components::*;
use crate::config::widget_config;
use ismart_core::catalog::{self, CATEGORIES, HERO_SLIDES, PRESS_FEATURES, TESTIMONIALS};
use ismart_core::{Card, OverflowPolicy};
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let widgets = widget_config();
    let best_sellers: Vec<Card> = catalog::best_sellers()
        .into_iter()
        .map(|product| product.card().href(format!("/category/{}", product.category)))
        .collect();
    let press: Vec<Card> = PRESS_FEATURES.iter().map(|feature| feature.card()).collect();

    view! {
        <div>
            <HeroCarousel slides=HERO_SLIDES interval=widgets.autoplay_interval()/>

            // Trust bar
            <section class="bg-white border-b border-gray-100">
                <div class="container mx-auto px-4 py-10 grid grid-cols-2 md:grid-cols-4 gap-8">
                    <StatCard value="70+" label="Quality checkpoints"/>
                    <StatCard value="12 mo" label="Warranty on every device"/>
                    <StatCard value="30 days" label="Free returns"/>
                    <StatCard value="4.8 ★" label="Average customer rating"/>
                </div>
            </section>

            // Categories
            <section id="categories" class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <SectionHeading
                        title="Shop by category"
                        subtitle="Every device is inspected, graded and backed by our warranty."
                    />
                    <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                        {CATEGORIES
                            .iter()
                            .map(|category| view! { <ContentCard card=category.card()/> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Best sellers
            <section class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <SectionHeading title="Best sellers" subtitle="The devices our customers love most right now."/>
                    <CardSlider
                        cards=best_sellers
                        window=widgets.best_seller_window
                        policy=OverflowPolicy::Wrap
                        label="Best sellers"
                    />
                </div>
            </section>

            // Testimonials
            <section class="py-20 bg-emerald-50">
                <div class="container mx-auto px-4">
                    <SectionHeading title="What our customers say"/>
                    <TestimonialCarousel
                        testimonials=TESTIMONIALS
                        interval=widgets.testimonial_autoplay_interval()
                    />
                </div>
            </section>

            // Press
            <section class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <SectionHeading title="As seen in"/>
                    <CardSlider
                        cards=press
                        window=widgets.press_window
                        policy=OverflowPolicy::Clamp
                        label="Press coverage"
                    />
                </div>
            </section>

            // CTA
            <section class="py-20 bg-gradient-to-r from-emerald-600 to-teal-600 text-white">
                <div class="container mx-auto px-4 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Got questions before you buy?"</h2>
                    <p class="text-xl text-emerald-100 mb-8 max-w-2xl mx-auto">
                        "Our help center covers grading, delivery, returns and warranty in plain English."
                    </p>
                    <a
                        href="/help"
                        class="inline-block px-8 py-4 bg-white text-emerald-700 font-semibold rounded-lg hover:bg-gray-100 transition"
                    >
                        "Visit the help center"
                    </a>
                </div>
            </section>
        </div>
    }
}
