//! About page

use crate::components::*;
use ismart_core::catalog::{PRESS_FEATURES, VALUES};
use leptos::*;
use leptos_meta::Style;

// Owned by this page: mounted with it and removed when it unmounts.
const ABOUT_STYLES: &str = r#"
@keyframes ismart-marquee {
    from { transform: translateX(0); }
    to { transform: translateX(-50%); }
}
.ismart-marquee-track {
    display: flex;
    width: max-content;
    animation: ismart-marquee 30s linear infinite;
}
.ismart-marquee-track:hover {
    animation-play-state: paused;
}
"#;

const MILESTONES: &[(&str, &str)] = &[
    ("2017", "Started repairing phones out of a garage in Austin."),
    ("2019", "Launched the ISmart store with 40 refurbished iPhones."),
    ("2021", "Introduced the 70-point inspection and honest grading."),
    ("2024", "Opened our second refurbishment lab and passed 500,000 devices renewed."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div>
            <Style id="about-page">{ABOUT_STYLES}</Style>

            <section class="bg-gradient-to-br from-gray-900 to-emerald-900 text-white py-20">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center">
                        <h1 class="text-4xl md:text-5xl font-bold mb-6">"Tech deserves a second life"</h1>
                        <p class="text-xl text-gray-300">
                            "ISmart renews premium electronics so more people can afford great tech "
                            "and fewer devices end up in landfill."
                        </p>
                    </div>
                </div>
            </section>

            <section class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <SectionHeading title="What we stand for"/>
                    <div class="grid md:grid-cols-3 gap-8">
                        {VALUES.iter().map(|value| view! { <ValueCard value=value/> }).collect_view()}
                    </div>
                </div>
            </section>

            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <SectionHeading title="Our story"/>
                    <ol class="max-w-2xl mx-auto border-l-2 border-emerald-500 space-y-8 pl-6">
                        {MILESTONES
                            .iter()
                            .map(|(year, text)| view! {
                                <li>
                                    <p class="text-emerald-700 font-bold">{*year}</p>
                                    <p class="text-gray-700">{*text}</p>
                                </li>
                            })
                            .collect_view()}
                    </ol>
                </div>
            </section>

            <section class="py-16 bg-white overflow-hidden">
                <SectionHeading title="In the press"/>
                <div class="ismart-marquee-track gap-12">
                    // Rendered twice so the loop has no gap.
                    {PRESS_FEATURES
                        .iter()
                        .chain(PRESS_FEATURES.iter())
                        .map(|feature| view! {
                            <figure class="w-72 shrink-0 px-6">
                                <blockquote class="text-gray-700 italic">{format!("“{}”", feature.quote)}</blockquote>
                                <figcaption class="mt-2 font-semibold text-gray-900">{feature.outlet}</figcaption>
                            </figure>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="py-20 bg-emerald-700 text-white">
                <div class="container mx-auto px-4 grid grid-cols-2 md:grid-cols-4 gap-8 text-center">
                    <div><div class="text-4xl font-bold">"500k+"</div><div class="text-emerald-100">"Devices renewed"</div></div>
                    <div><div class="text-4xl font-bold">"25,000 t"</div><div class="text-emerald-100">"CO2 avoided"</div></div>
                    <div><div class="text-4xl font-bold">"120"</div><div class="text-emerald-100">"Technicians"</div></div>
                    <div><div class="text-4xl font-bold">"4.8 ★"</div><div class="text-emerald-100">"Customer rating"</div></div>
                </div>
            </section>
        </div>
    }
}
