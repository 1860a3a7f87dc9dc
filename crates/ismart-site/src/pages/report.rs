//! Content report form. Extra fields appear depending on the selected query.

use crate::components::*;
use ismart_core::validation::{
    ILLEGAL_CONTENT_CATEGORIES, ILLEGAL_CONTENT_QUERY, ORDER_HELP_QUERY, REPORT_QUERIES,
};
use ismart_core::FormKind;
use leptos::*;

#[component]
pub fn ReportPage() -> impl IntoView {
    let form = use_form(FormKind::Report);
    let query = move || form.state.with(|state| state.value("selectedQuery").to_string());
    let is_illegal = move || query() == ILLEGAL_CONTENT_QUERY;
    let is_order_help = move || query() == ORDER_HELP_QUERY;

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        form.submit();
    };

    view! {
        <div>
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white py-16">
                <div class="container mx-auto px-4 text-center">
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">"Report a Problem"</h1>
                    <p class="text-xl text-gray-300">"Tell us about illegal content, a listing issue or an order."</p>
                </div>
            </section>

            <section class="py-16 bg-white">
                <div class="container mx-auto px-4 max-w-2xl">
                    <Show
                        when=move || form.succeeded()
                        fallback=move || view! {
                            <form class="space-y-6" novalidate on:submit=on_submit>
                                <SelectField
                                    form=form
                                    field="selectedQuery"
                                    label="What would you like to report? *"
                                    options=REPORT_QUERIES
                                />
                                <div class="grid md:grid-cols-2 gap-6">
                                    <TextField form=form field="name" label="Name *"/>
                                    <TextField form=form field="email" label="Email *" input_type="email"/>
                                </div>

                                <Show when=is_illegal>
                                    <div class="space-y-6 p-6 bg-amber-50 border border-amber-200 rounded-lg">
                                        <SelectField
                                            form=form
                                            field="category"
                                            label="Type of illegal content *"
                                            options=ILLEGAL_CONTENT_CATEGORIES
                                        />
                                        <TextField
                                            form=form
                                            field="contentUrl"
                                            label="Link to the content *"
                                            input_type="url"
                                            placeholder="https://"
                                        />
                                    </div>
                                </Show>

                                <Show when=is_order_help>
                                    <TextField form=form field="orderNumber" label="Order number *" placeholder="e.g. IS-104233"/>
                                </Show>

                                <TextArea
                                    form=form
                                    field="description"
                                    label="Description *"
                                    rows=6
                                    placeholder="Please give as much detail as you can"
                                />

                                <Show when=is_illegal>
                                    <CheckboxField
                                        form=form
                                        field="confirm"
                                        label="I confirm this report is accurate and made in good faith."
                                    />
                                </Show>

                                <FormBanner form=form/>
                                <SubmitButton form=form label="Submit Report"/>
                            </form>
                        }
                    >
                        <FormSuccess form=form title="Report Received"/>
                    </Show>
                </div>
            </section>
        </div>
    }
}
