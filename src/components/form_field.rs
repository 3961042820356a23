use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::form::validation::Field;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub field: Field,
    pub value: String,
    pub error: Option<String>,
    pub oninput: Callback<String>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or(AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub required: bool,
}

/// Labelled input for one form field, with the field's error rendered
/// underneath.
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let id = props.field.as_str();

    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            oninput.emit(input.value());
        })
    };

    html! {
        <div class="form-field">
            if let Some(label) = &props.label {
                <label for={id}>
                    {label.clone()}
                    if props.required { {" *"} }
                </label>
            }
            <input
                id={id}
                name={id}
                type={props.input_type.clone()}
                class={classes!("form-input", props.error.is_some().then(|| "invalid"))}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                oninput={oninput}
            />
            if let Some(message) = &props.error {
                <p class="field-error">{message}</p>
            }
        </div>
    }
}
