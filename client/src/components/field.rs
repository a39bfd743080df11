//! Labeled form control: text input, number input, or select.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use leptos::prelude::*;

/// One `<option>` of a select field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// What kind of control a [`FormField`] renders.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldKind {
    Text,
    Number { min: Option<f64>, max: Option<f64> },
    Select(Vec<SelectOption>),
}

impl FieldKind {
    /// `type` attribute of the `<input>`, or `None` for selects.
    #[must_use]
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            Self::Text => Some("text"),
            Self::Number { .. } => Some("number"),
            Self::Select(_) => None,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        match self {
            Self::Number { min, max } => (*min, *max),
            Self::Text | Self::Select(_) => (None, None),
        }
    }
}

fn bound_attr(bound: Option<f64>) -> Option<String> {
    bound.map(|b| b.to_string())
}

/// Renders `label` above a control and reports every edit through
/// `on_change` with the raw string value.
#[component]
pub fn FormField(
    label: &'static str,
    kind: FieldKind,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let control = match kind {
        FieldKind::Select(options) => view! {
            <select
                class="input"
                required=required
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|option| view! { <option value=option.value>{option.label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        kind => {
            let (min, max) = kind.bounds();
            view! {
                <input
                    class="input"
                    type=kind.input_type()
                    min=bound_attr(min)
                    max=bound_attr(max)
                    required=required
                    prop:value=move || value.get()
                    on:input=move |ev| on_change.run(event_target_value(&ev))
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="form-field">
            <label>{label}</label>
            {control}
        </div>
    }
}
