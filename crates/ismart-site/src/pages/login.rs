//! Sign-in page. Credentials are validated but no session is created.

use crate::components::*;
use ismart_core::FormKind;
use leptos::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = use_form(FormKind::Login);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        form.submit();
    };

    view! {
        <section class="py-20 bg-gray-50 min-h-[70vh]">
            <div class="container mx-auto px-4 max-w-md">
                <div class="bg-white rounded-xl shadow p-8">
                    <h1 class="text-2xl font-bold text-gray-900 mb-6 text-center">"Sign in"</h1>
                    <Show
                        when=move || form.succeeded()
                        fallback=move || view! {
                            <form class="space-y-5" novalidate on:submit=on_submit>
                                <TextField form=form field="email" label="Email" input_type="email"/>
                                <TextField form=form field="password" label="Password" input_type="password"/>
                                <FormBanner form=form/>
                                <SubmitButton form=form label="Sign in"/>
                            </form>
                        }
                    >
                        <FormSuccess form=form title="Signed in"/>
                    </Show>
                    <p class="text-sm text-gray-500 text-center mt-6">
                        "New to ISmart? Accounts are created at checkout."
                    </p>
                </div>
            </div>
        </section>
    }
}
