use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Labelled text input with an inline error line
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// `name` attribute
    name: &'static str,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
    /// Inline style for the wrapper, used by entrance tweens
    #[prop(optional)]
    style: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <div class="form-input" style=move || style.map(|s| s.get()).unwrap_or_default()>
            <label class="block text-sm font-medium mb-2" for=name>
                {label}
            </label>
            <input
                id=name
                name=name
                type=input_type
                class="w-full input-glow"
                class:input-invalid=move || error.and_then(|e| e.get()).is_some()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError error=error />
        </div>
    }
}

/// Labelled textarea with an inline error line
#[component]
pub fn TextAreaField(
    /// Field label text
    label: &'static str,
    /// `name` attribute
    name: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 6)]
    rows: u32,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
    /// Inline style for the wrapper, used by entrance tweens
    #[prop(optional)]
    style: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <div class="form-input" style=move || style.map(|s| s.get()).unwrap_or_default()>
            <label class="block text-sm font-medium mb-2" for=name>
                {label}
            </label>
            <textarea
                id=name
                name=name
                class="w-full input-glow resize-none"
                class:input-invalid=move || error.and_then(|e| e.get()).is_some()
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError error=error />
        </div>
    }
}

#[component]
fn FieldError(error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error.and_then(|e| e.get()).map(|err| view! {
            <p class="flex items-center gap-1 text-red-400 text-sm mt-1" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="w-4 h-4" />
                <span>{err}</span>
            </p>
        })
    }
}
