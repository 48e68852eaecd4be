use leptos::prelude::*;

/// Поле ввода формы: подпись, описание и сообщение об ошибке
#[component]
pub fn Input(
    /// Label text
    #[prop(into)]
    label: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "password", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Hint shown under the input
    #[prop(optional, into)]
    description: MaybeProp<String>,
    /// Field error, shown below the hint
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// ID for the input element
    #[prop(into)]
    id: String,
    /// Autocomplete attribute
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
) -> impl IntoView {
    let label_for = id.clone();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_autocomplete = move || autocomplete.get().unwrap_or_else(|| "off".to_string());
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group">
            <label class="form__label" for=label_for>{label}</label>
            <input
                id=id
                class=move || if has_error() { "form__input form__input--invalid" } else { "form__input" }
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                autocomplete=input_autocomplete
                aria-invalid=move || has_error().to_string()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || description.get().map(|d| view! {
                <div class="form__description">{d}</div>
            })}
            {move || error.get().map(|e| view! {
                <div class="form__error" role="alert">{e}</div>
            })}
        </div>
    }
}
