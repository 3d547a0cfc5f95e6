// ============================================================================
// FORM FIELDS - Inputs etiquetados ligados a un Rc<RefCell<String>>
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{append_child, on_input_value, ElementBuilder};

/// `<label>` + `<input>`; cada tecla se escribe en `value` sin re-render
pub fn create_input_field(
    label: &str,
    input_type: &str,
    value: &Rc<RefCell<String>>,
    disabled: bool,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("label")?
        .class("form-field")
        .child(ElementBuilder::new("span")?.class("form-label").text(label).build())?
        .build();

    let input = ElementBuilder::new("input")?
        .class("form-input")
        .disabled(disabled)?
        .build();
    for (name, attr_value) in input_attributes(input_type) {
        input.set_attribute(name, &attr_value)?;
    }
    // Propiedad DOM, no atributo: el valor no queda en el markup serializado
    input
        .dyn_ref::<HtmlInputElement>()
        .ok_or_else(|| JsValue::from_str("form field is not an <input>"))?
        .set_value(&value.borrow());

    {
        let value = value.clone();
        on_input_value(&input, move |text| {
            *value.borrow_mut() = text;
        })?;
    }

    append_child(&group, &input)?;
    Ok(group)
}

/// Atributos que van al markup del <input>. El valor nunca está aquí.
fn input_attributes(input_type: &str) -> Vec<(&'static str, String)> {
    let mut attributes = vec![("type", input_type.to_string())];
    match input_type {
        "number" => attributes.push(("step", "any".to_string())),
        "password" => attributes.push(("autocomplete", "current-password".to_string())),
        "email" => attributes.push(("autocomplete", "username".to_string())),
        _ => {}
    }
    attributes
}

/// Línea de estado (vacía si no hay mensaje)
pub fn create_status_line(status: Option<&str>) -> Result<Element, JsValue> {
    let line = ElementBuilder::new("p")?.class("status-line").build();
    if let Some(message) = status {
        line.set_text_content(Some(message));
        line.set_attribute("role", "status")?;
    }
    Ok(line)
}

/// `<option>` con el atributo `selected` cuando corresponde
pub fn create_option(value: &str, label: &str, selected: bool) -> Result<Element, JsValue> {
    let option = ElementBuilder::new("option")?
        .attr("value", value)?
        .text(label)
        .build();
    if selected {
        option.set_attribute("selected", "")?;
    }
    Ok(option)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_never_carries_the_value() {
        for input_type in ["password", "email", "number", "text"] {
            let attributes = input_attributes(input_type);
            assert!(attributes.iter().all(|(name, _)| *name != "value"), "{}", input_type);
            assert_eq!(attributes[0], ("type", input_type.to_string()));
        }
    }

    #[test]
    fn test_number_inputs_accept_decimals() {
        assert!(input_attributes("number").contains(&("step", "any".to_string())));
        assert!(input_attributes("password").contains(&("autocomplete", "current-password".to_string())));
    }
}
