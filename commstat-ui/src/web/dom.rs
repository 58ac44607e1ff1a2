use super::error::{WebError, describe_js};
use commstat_config::SortWidgetConfig;
use commstat_contracts::{FilterFormSurface, SortIconSurface, SurfaceError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlFormElement, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement,
};

/// Attribute on the filter form holding a JSON layout override.
pub const SORT_CONFIG_ATTRIBUTE: &str = "data-sort-config";

fn dom_error(value: JsValue) -> SurfaceError {
    SurfaceError::Dom(describe_js(&value))
}

pub fn document() -> Result<Document, WebError> {
    web_sys::window()
        .ok_or(WebError::MissingWindow)?
        .document()
        .ok_or(WebError::MissingDocument)
}

/// A sort icon element.
#[derive(Debug, Clone)]
pub struct DomSortIcon {
    element: Element,
}

impl DomSortIcon {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// First element carrying `base_class` inside the widget `widget_id`.
    pub fn locate(
        document: &Document,
        widget_id: &str,
        base_class: &str,
    ) -> Result<Self, WebError> {
        let widget = document.get_element_by_id(widget_id).ok_or_else(|| {
            WebError::MissingElement(format!("#{widget_id}"))
        })?;
        let element = widget
            .get_elements_by_class_name(base_class)
            .item(0)
            .ok_or_else(|| {
                WebError::MissingElement(format!("#{widget_id} .{base_class}"))
            })?;
        Ok(Self { element })
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl SortIconSurface for DomSortIcon {
    fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }

    fn set_class(
        &mut self,
        class: &str,
        enabled: bool,
    ) -> Result<(), SurfaceError> {
        self.element
            .class_list()
            .toggle_with_force(class, enabled)
            .map(|_| ())
            .map_err(dom_error)
    }

    fn classes(&self) -> Vec<String> {
        let list = self.element.class_list();
        (0..list.length()).filter_map(|index| list.item(index)).collect()
    }
}

/// The filter form's sort select and inverse checkbox.
#[derive(Debug, Clone)]
pub struct DomFilterForm {
    select: HtmlSelectElement,
    inverse: HtmlInputElement,
}

impl DomFilterForm {
    pub fn new(select: HtmlSelectElement, inverse: HtmlInputElement) -> Self {
        Self { select, inverse }
    }

    /// `document.forms[form_name]`.
    pub fn find_form(
        document: &Document,
        form_name: &str,
    ) -> Result<HtmlFormElement, WebError> {
        document
            .forms()
            .named_item(form_name)
            .ok_or_else(|| {
                WebError::MissingElement(format!("form {form_name:?}"))
            })?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| WebError::WrongElementType(format!("form {form_name:?}")))
    }

    /// Select and checkbox named by `config` inside `form`.
    pub fn locate(
        form: &HtmlFormElement,
        config: &SortWidgetConfig,
    ) -> Result<Self, WebError> {
        let elements = form.elements();
        let select = elements
            .named_item(&config.select_name)
            .ok_or_else(|| {
                WebError::MissingElement(format!(
                    "{}.{}",
                    config.form_name, config.select_name
                ))
            })?
            .dyn_into::<HtmlSelectElement>()
            .map_err(|_| {
                WebError::WrongElementType(format!(
                    "{}.{}",
                    config.form_name, config.select_name
                ))
            })?;
        let inverse = elements
            .named_item(&config.inverse_name)
            .ok_or_else(|| {
                WebError::MissingElement(format!(
                    "{}.{}",
                    config.form_name, config.inverse_name
                ))
            })?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| {
                WebError::WrongElementType(format!(
                    "{}.{}",
                    config.form_name, config.inverse_name
                ))
            })?;
        Ok(Self { select, inverse })
    }

    fn options(&self) -> Vec<HtmlOptionElement> {
        let options = self.select.options();
        (0..options.length())
            .filter_map(|index| options.item(index))
            .filter_map(|option| option.dyn_into::<HtmlOptionElement>().ok())
            .collect()
    }
}

impl FilterFormSurface for DomFilterForm {
    fn option_values(&self) -> Vec<String> {
        self.options().iter().map(HtmlOptionElement::value).collect()
    }

    fn selected_value(&self) -> Option<String> {
        self.select
            .selected_options()
            .item(0)
            .and_then(|option| option.dyn_into::<HtmlOptionElement>().ok())
            .map(|option| option.value())
    }

    fn select_value(&mut self, value: &str) -> Result<(), SurfaceError> {
        let options = self.options();
        if !options.iter().any(|option| option.value() == value) {
            return Err(SurfaceError::MissingOption(value.to_string()));
        }
        // Works for single and `multiple` selects alike.
        for option in options {
            option.set_selected(option.value() == value);
        }
        Ok(())
    }

    fn inverse(&self) -> bool {
        self.inverse.checked()
    }

    fn set_inverse(&mut self, checked: bool) -> Result<(), SurfaceError> {
        self.inverse.set_checked(checked);
        Ok(())
    }
}

/// Layout override from the form's `data-sort-config` attribute, if any.
/// Fields left out of the override come from `page`.
pub fn config_override(
    form: &HtmlFormElement,
    page: &SortWidgetConfig,
) -> Result<Option<SortWidgetConfig>, WebError> {
    let Some(raw) = form.get_attribute(SORT_CONFIG_ATTRIBUTE) else {
        return Ok(None);
    };
    let config = serde_json::from_str::<SortWidgetConfig>(&raw)?
        .with_default_fields(page);
    config.validate()?;
    Ok(Some(config))
}
