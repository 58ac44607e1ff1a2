use super::dom::{self, DomFilterForm, DomSortIcon};
use super::error::WebError;
use crate::error::SortControlError;
use crate::sort_control::SortControl;
use commstat_config::SortWidgetConfig;
use commstat_model::SortKey;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

pub type DomSortControl<K> = SortControl<K, DomSortIcon, DomFilterForm>;

type ClickHandler = Closure<dyn FnMut(web_sys::Event)>;

thread_local! {
    // Click handlers per mounted form; they live as long as the page.
    static CLICK_HANDLERS: RefCell<HashMap<String, Vec<ClickHandler>>> =
        RefCell::new(HashMap::new());
}

/// Binds a sort control to the page and installs one click handler per icon.
///
/// The form's `data-sort-config` attribute, when present, replaces `config`.
/// Mounting the same form twice is a no-op returning `Ok(None)`.
pub fn mount_sort_control<K: SortKey>(
    config: SortWidgetConfig,
) -> Result<Option<Rc<RefCell<DomSortControl<K>>>>, WebError> {
    let document = dom::document()?;
    let form_element = DomFilterForm::find_form(&document, &config.form_name)?;
    let config = match dom::config_override(&form_element, &config)? {
        Some(custom) => {
            log::info!("using sort layout from {}", dom::SORT_CONFIG_ATTRIBUTE);
            custom
        }
        None => config,
    };

    let already_mounted = CLICK_HANDLERS
        .with(|slot| slot.borrow().contains_key(&config.form_name));
    if already_mounted {
        log::warn!("sort control for form {:?} already mounted", config.form_name);
        return Ok(None);
    }

    let form = DomFilterForm::locate(&form_element, &config)?;
    let base_class = config.classes.base.clone();
    let control = SortControl::<K, _, _>::from_config(
        &config,
        form,
        |field, widget_id| {
            DomSortIcon::locate(&document, widget_id, &base_class).map_err(
                |_| SortControlError::MissingIcon {
                    field: field.as_str(),
                    widget_id: widget_id.to_string(),
                },
            )
        },
    )?;
    let control = Rc::new(RefCell::new(control));

    let targets: Vec<(K, web_sys::Element)> = control
        .borrow()
        .icons()
        .map(|(field, icon)| (field, icon.element().clone()))
        .collect();

    let mut handlers = Vec::with_capacity(targets.len());
    for (field, element) in targets {
        let control = Rc::clone(&control);
        let callback = ClickHandler::wrap(Box::new(
            move |_event: web_sys::Event| {
                if let Err(err) = handle_click(&control, field) {
                    log::error!(
                        "sort click on {} failed: {err}",
                        field.as_str()
                    );
                }
            },
        )
            as Box<dyn FnMut(web_sys::Event)>);
        element
            .add_event_listener_with_callback(
                "click",
                callback.as_ref().unchecked_ref(),
            )
            .map_err(WebError::js)?;
        handlers.push(callback);
    }

    CLICK_HANDLERS.with(|slot| {
        slot.borrow_mut().insert(config.form_name.clone(), handlers);
    });
    log::debug!("mounted sort control on form {:?}", config.form_name);
    Ok(Some(control))
}

fn handle_click<K: SortKey>(
    control: &Rc<RefCell<DomSortControl<K>>>,
    field: K,
) -> Result<(), WebError> {
    let mut control = control.try_borrow_mut().map_err(|_| WebError::Busy)?;
    let state = control.activate_or_toggle(field)?;
    log::debug!("sort is now {}", state.summary_label());
    Ok(())
}
