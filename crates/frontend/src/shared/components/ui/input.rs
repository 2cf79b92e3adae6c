use leptos::prelude::*;

/// Numeric input with label support.
///
/// The value stays a `String`: what the cashier typed is parsed leniently
/// when the line is added, not on every keystroke.
#[component]
pub fn NumberInput(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// `step` attribute, "any" by default
    #[prop(optional, into)]
    step: MaybeProp<String>,
    /// `min` attribute
    #[prop(optional, into)]
    min: MaybeProp<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_step = move || step.get().unwrap_or_else(|| "any".to_string());
    let input_min = move || min.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                type="number"
                inputmode="decimal"
                step=input_step
                min=input_min
                prop:value=move || value.get()
                placeholder=input_placeholder
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
