//! Form fields bound to a shared `FormState` signal

use crate::api::SubmitForm;
use ismart_core::{FormKind, FormState, SubmitStatus, GENERIC_FAILURE_MESSAGE};
use leptos::*;

const INPUT: &str = "w-full px-4 py-3 border rounded-lg focus:ring-2 focus:ring-emerald-500 focus:border-emerald-500";

fn input_class(has_error: bool) -> String {
    if has_error {
        format!("{INPUT} border-red-500")
    } else {
        format!("{INPUT} border-gray-300")
    }
}

/// State and submit action for one mounted form
#[derive(Clone, Copy)]
pub struct FormHandle {
    pub kind: FormKind,
    pub state: RwSignal<FormState>,
    action: Action<SubmitForm, Result<String, ServerFnError>>,
}

impl FormHandle {
    /// Validate and, when clean, send the values to the submission stub.
    pub fn submit(&self) {
        let rules = self.kind.rules();
        let mut payload = None;
        self.state.update(|state| payload = state.begin_submit(&rules));
        match payload {
            Some(values) => self.action.dispatch(SubmitForm {
                form: self.kind.as_str().to_string(),
                values: values.into_map(),
            }),
            None => tracing::debug!(form = %self.kind, "submission blocked by validation"),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.state
            .with(|state| matches!(state.status(), SubmitStatus::Succeeded(_)))
    }

    pub fn submitting(&self) -> bool {
        self.state.with(FormState::is_submitting)
    }

    pub fn reset(&self) {
        self.state.update(FormState::reset);
    }
}

pub fn use_form(kind: FormKind) -> FormHandle {
    let state = create_rw_signal(FormState::new(kind.default_values()));
    let action = create_server_action::<SubmitForm>();

    create_effect(move |_| {
        if let Some(result) = action.value().get() {
            let result = result.map_err(|err| {
                tracing::warn!(form = %kind, error = %err, "form submission failed");
                GENERIC_FAILURE_MESSAGE.to_string()
            });
            state.update(|state| state.finish_submit(result));
        }
    });

    FormHandle { kind, state, action }
}

#[component]
fn FieldError(form: FormHandle, field: &'static str) -> impl IntoView {
    let error = move || form.state.with(|state| state.error(field).map(str::to_string));
    view! {
        {move || error().map(|message| view! { <p class="mt-1 text-sm text-red-600">{message}</p> })}
    }
}

#[component]
pub fn TextField(
    form: FormHandle,
    field: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let value = move || form.state.with(|state| state.value(field).to_string());
    let has_error = move || form.state.with(|state| state.error(field).is_some());

    view! {
        <div>
            <label for=field class="block text-sm font-medium text-gray-700 mb-2">{label}</label>
            <input
                id=field
                name=field
                type=input_type
                class=move || input_class(has_error())
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| form.state.update(|state| state.set(field, event_target_value(&ev)))
            />
            <FieldError form=form field=field/>
        </div>
    }
}

#[component]
pub fn TextArea(
    form: FormHandle,
    field: &'static str,
    label: &'static str,
    #[prop(default = 5)] rows: u32,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let value = move || form.state.with(|state| state.value(field).to_string());
    let has_error = move || form.state.with(|state| state.error(field).is_some());

    view! {
        <div>
            <label for=field class="block text-sm font-medium text-gray-700 mb-2">{label}</label>
            <textarea
                id=field
                name=field
                rows=rows
                class=move || input_class(has_error())
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| form.state.update(|state| state.set(field, event_target_value(&ev)))
            ></textarea>
            <FieldError form=form field=field/>
        </div>
    }
}

#[component]
pub fn SelectField(
    form: FormHandle,
    field: &'static str,
    label: &'static str,
    options: &'static [&'static str],
    #[prop(default = "Please select…")] prompt: &'static str,
) -> impl IntoView {
    let value = move || form.state.with(|state| state.value(field).to_string());
    let has_error = move || form.state.with(|state| state.error(field).is_some());

    view! {
        <div>
            <label for=field class="block text-sm font-medium text-gray-700 mb-2">{label}</label>
            <select
                id=field
                name=field
                class=move || input_class(has_error())
                prop:value=value
                on:change=move |ev| form.state.update(|state| state.set(field, event_target_value(&ev)))
            >
                <option value="">{prompt}</option>
                {options
                    .iter()
                    .map(|option| view! { <option value=*option>{*option}</option> })
                    .collect_view()}
            </select>
            <FieldError form=form field=field/>
        </div>
    }
}

/// Checkbox stored as `"true"` / `""` so "required" means "ticked"
#[component]
pub fn CheckboxField(form: FormHandle, field: &'static str, label: &'static str) -> impl IntoView {
    let checked = move || form.state.with(|state| state.value(field) == "true");

    view! {
        <div>
            <label class="flex items-start gap-3 text-sm text-gray-700">
                <input
                    type="checkbox"
                    name=field
                    class="mt-1 h-4 w-4 rounded border-gray-300 text-emerald-600"
                    prop:checked=checked
                    on:change=move |ev| {
                        let value = if event_target_checked(&ev) { "true" } else { "" };
                        form.state.update(|state| state.set(field, value));
                    }
                />
                <span>{label}</span>
            </label>
            <FieldError form=form field=field/>
        </div>
    }
}

#[component]
pub fn SubmitButton(form: FormHandle, label: &'static str) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || form.submitting()
            class="w-full py-4 bg-emerald-600 hover:bg-emerald-700 disabled:bg-emerald-400 text-white font-semibold rounded-lg transition"
        >
            {move || if form.submitting() { "Sending…" } else { label }}
        </button>
    }
}

/// Failure banner shown above the submit button
#[component]
pub fn FormBanner(form: FormHandle) -> impl IntoView {
    let failure = move || {
        form.state.with(|state| match state.status() {
            SubmitStatus::Failed(message) => Some(message.clone()),
            _ => None,
        })
    };

    view! {
        {move || failure().map(|message| view! {
            <div class="p-4 rounded-lg bg-red-50 text-red-700 text-sm">{message}</div>
        })}
    }
}

/// Confirmation panel replacing a successfully submitted form
#[component]
pub fn FormSuccess(form: FormHandle, title: &'static str) -> impl IntoView {
    let message = move || {
        form.state
            .with(|state| state.status().message().unwrap_or_default().to_string())
    };

    view! {
        <div class="text-center py-12">
            <div class="text-5xl mb-4 text-emerald-600">"✓"</div>
            <h3 class="text-2xl font-bold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600 mb-6">{message}</p>
            <button
                class="text-emerald-700 hover:text-emerald-900 font-medium"
                on:click=move |_| form.reset()
            >
                "Send another"
            </button>
        </div>
    }
}
