//! Contact page

use crate::components::*;
use ismart_core::validation::CONTACT_SUBJECTS;
use ismart_core::FormKind;
use leptos::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = use_form(FormKind::Contact);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        form.submit();
    };

    view! {
        <div>
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white py-16">
                <div class="container mx-auto px-4 text-center">
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">"Get in Touch"</h1>
                    <p class="text-xl text-gray-300">"Questions about an order, a device or a trade-in? We're here."</p>
                </div>
            </section>

            <section class="py-16 bg-white">
                <div class="container mx-auto px-4">
                    <div class="grid lg:grid-cols-3 gap-12 max-w-6xl mx-auto">
                        <div class="lg:col-span-2">
                            <Show
                                when=move || form.succeeded()
                                fallback=move || view! {
                                    <form class="space-y-6" novalidate on:submit=on_submit>
                                        <div class="grid md:grid-cols-2 gap-6">
                                            <TextField form=form field="name" label="Name *"/>
                                            <TextField form=form field="email" label="Email *" input_type="email"/>
                                        </div>
                                        <div class="grid md:grid-cols-2 gap-6">
                                            <SelectField form=form field="subject" label="Subject *" options=CONTACT_SUBJECTS/>
                                            <TextField form=form field="orderNumber" label="Order number" placeholder="Optional"/>
                                        </div>
                                        <TextArea form=form field="message" label="Message *" rows=6/>
                                        <FormBanner form=form/>
                                        <SubmitButton form=form label="Send Message"/>
                                    </form>
                                }
                            >
                                <FormSuccess form=form title="Message Sent!"/>
                            </Show>
                        </div>

                        <div class="space-y-8">
                            <div>
                                <h3 class="text-lg font-semibold text-gray-900 mb-2">"Customer support"</h3>
                                <p class="text-gray-600">"support@ismart.example"</p>
                                <p class="text-gray-600">"Mon–Fri, 9am–6pm CT"</p>
                            </div>
                            <div>
                                <h3 class="text-lg font-semibold text-gray-900 mb-2">"Trade-ins"</h3>
                                <p class="text-gray-600">"tradein@ismart.example"</p>
                            </div>
                            <div>
                                <h3 class="text-lg font-semibold text-gray-900 mb-2">"Looking for answers?"</h3>
                                <a href="/help" class="text-emerald-700 hover:text-emerald-900 font-medium">"Visit the help center →"</a>
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
