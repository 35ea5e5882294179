//! Browser binding for the tag selector.
//!
//! `initAutocomplete` binds a [`TagSelector`] to the page's elements and wires
//! the key and click listeners. The returned handle owns the listeners;
//! freeing it removes them from the page.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, KeyboardEvent, MouseEvent};

use crate::api_types::{Candidate, PlayerId, TagChip};
use crate::config::{tags, SelectorConfig};
use crate::errors::{AppError, AppResult};
use crate::tag_selector::TagSelector;
use crate::view::TagView;

/// [`TagView`] over real DOM elements
pub struct DomView {
    document: Document,
    input: HtmlInputElement,
    tags: Element,
    hidden: HtmlInputElement,
    datalist: Element,
    dismiss_class: String,
}

impl DomView {
    /// Resolves the configured element ids in `document`.
    pub fn bind(document: Document, config: &SelectorConfig) -> AppResult<Self> {
        let input = find_input(&document, &config.input_id)?;
        let tags = find_element(&document, &config.tags_id)?;
        let hidden = find_input(&document, &config.hidden_id)?;

        let datalist = match document.get_element_by_id(&config.datalist_id) {
            Some(existing) => existing,
            None => {
                let datalist = document
                    .create_element("datalist")
                    .map_err(|e| js_error("create datalist", e))?;
                datalist.set_id(&config.datalist_id);
                let body = document
                    .body()
                    .ok_or_else(|| AppError::config("document has no body"))?;
                body.append_child(&datalist)
                    .map_err(|e| js_error("append datalist", e))?;
                datalist
            }
        };
        input
            .set_attribute("list", &config.datalist_id)
            .map_err(|e| js_error("attach datalist", e))?;

        Ok(Self {
            document,
            input,
            tags,
            hidden,
            datalist,
            dismiss_class: config.dismiss_class.clone(),
        })
    }

    fn build_tag(&self, chip: &TagChip) -> Result<Element, JsValue> {
        let tag = self.document.create_element("span")?;
        tag.set_class_name(&chip.class);
        tag.append_child(&self.document.create_text_node(&chip.label))?;

        let button = self.document.create_element("button")?;
        button.set_attribute("type", "button")?;
        button.set_attribute(tags::ID_ATTRIBUTE, &chip.id.to_string())?;
        button.set_class_name(&self.dismiss_class);
        button.set_text_content(Some(chip.dismiss_label.as_str()));
        tag.append_child(&button)?;

        Ok(tag)
    }
}

impl TagView for DomView {
    fn install_suggestions(&mut self, names: &[String]) {
        self.datalist.set_inner_html("");
        for name in names {
            let option = match self.document.create_element("option") {
                Ok(option) => option,
                Err(e) => {
                    warn!("Failed to create suggestion option: {e:?}");
                    return;
                }
            };
            if let Err(e) = option.set_attribute("value", name) {
                warn!("Failed to set suggestion value: {e:?}");
                continue;
            }
            if let Err(e) = self.datalist.append_child(&option) {
                warn!("Failed to append suggestion: {e:?}");
            }
        }
    }

    fn input_value(&self) -> String {
        self.input.value()
    }

    fn clear_input(&mut self) {
        self.input.set_value("");
    }

    fn clear_tags(&mut self) {
        self.tags.set_inner_html("");
    }

    fn append_tag(&mut self, chip: &TagChip) {
        let appended = self
            .build_tag(chip)
            .and_then(|tag| self.tags.append_child(&tag));
        if let Err(e) = appended {
            warn!("Failed to render tag for player {}: {e:?}", chip.id);
        }
    }

    fn set_hidden_value(&mut self, value: &str) {
        self.hidden.set_value(value);
    }
}

/// Keeps a bound selector and its listeners alive
#[wasm_bindgen]
pub struct SelectorHandle {
    selector: Rc<RefCell<TagSelector<DomView>>>,
    input: HtmlInputElement,
    tags: Element,
    on_keydown: Closure<dyn FnMut(KeyboardEvent)>,
    on_click: Closure<dyn FnMut(MouseEvent)>,
}

impl Drop for SelectorHandle {
    fn drop(&mut self) {
        // Listeners must go before their closures are freed
        if let Err(e) = self
            .input
            .remove_event_listener_with_callback("keydown", self.on_keydown.as_ref().unchecked_ref())
        {
            warn!("Failed to detach keydown listener: {e:?}");
        }
        if let Err(e) = self
            .tags
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref())
        {
            warn!("Failed to detach click listener: {e:?}");
        }
    }
}

#[wasm_bindgen]
impl SelectorHandle {
    /// Selected ids in display order
    pub fn selection(&self) -> Result<JsValue, JsValue> {
        let selector = self.selector.borrow();
        serde_wasm_bindgen::to_value(selector.selection())
            .map_err(|e| JsValue::from_str(&format!("selection encode failed: {e}")))
    }

    #[wasm_bindgen(js_name = hiddenValue)]
    pub fn hidden_value(&self) -> String {
        self.selector.borrow().hidden_value()
    }
}

/// プレイヤー選択ウィジェットを初期化する
///
/// `players` is an array of `{id, name}`, `preselected` an optional array of
/// ids and `config` an optional partial [`SelectorConfig`].
#[wasm_bindgen(js_name = initAutocomplete)]
pub fn init_autocomplete(
    players: JsValue,
    preselected: JsValue,
    config: JsValue,
) -> Result<SelectorHandle, JsValue> {
    let candidates: Vec<Candidate> = serde_wasm_bindgen::from_value(players)
        .map_err(|e| JsValue::from_str(&format!("invalid players: {e}")))?;
    let preselected: Vec<PlayerId> = if preselected.is_undefined() || preselected.is_null() {
        Vec::new()
    } else {
        serde_wasm_bindgen::from_value(preselected)
            .map_err(|e| JsValue::from_str(&format!("invalid preselected: {e}")))?
    };
    let config: SelectorConfig = if config.is_undefined() || config.is_null() {
        SelectorConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("invalid config: {e}")))?
    };

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| to_js(AppError::config("no document available")))?;

    let view = DomView::bind(document, &config).map_err(to_js)?;
    let input = view.input.clone();
    let tags = view.tags.clone();

    let selector = Rc::new(RefCell::new(TagSelector::with_config(
        candidates,
        preselected,
        view,
        config,
    )));

    let on_keydown = {
        let selector = Rc::clone(&selector);
        Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let Ok(mut selector) = selector.try_borrow_mut() else {
                warn!("Key press ignored while the selector is busy");
                return;
            };
            if selector.handle_key(&event.key()) {
                event.prevent_default();
            }
        })
    };
    input.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;

    // 削除ボタンのクリックはコンテナでまとめて受け取る
    let on_click = {
        let selector = Rc::clone(&selector);
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let Some(id) = dismissed_player(&event) else {
                return;
            };
            let Ok(mut selector) = selector.try_borrow_mut() else {
                warn!("Dismiss of player {id} ignored while the selector is busy");
                return;
            };
            selector.remove(id);
        })
    };
    tags.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;

    Ok(SelectorHandle {
        selector,
        input,
        tags,
        on_keydown,
        on_click,
    })
}

/// Player id of the dismiss button the click landed on, if any
fn dismissed_player(event: &MouseEvent) -> Option<PlayerId> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let selector = format!("button[{}]", tags::ID_ATTRIBUTE);
    let button = target.closest(&selector).ok()??;
    let raw = button.get_attribute(tags::ID_ATTRIBUTE)?;

    let id = parse_player_id(&raw);
    if id.is_none() {
        warn!("Dismiss button carries an invalid player id: {raw:?}");
    }
    id
}

fn parse_player_id(raw: &str) -> Option<PlayerId> {
    raw.trim().parse().ok()
}

fn find_element(document: &Document, id: &str) -> AppResult<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| AppError::config(format!("element #{id} not found")))
}

fn find_input(document: &Document, id: &str) -> AppResult<HtmlInputElement> {
    find_element(document, id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| AppError::config(format!("element #{id} is not an input")))
}

fn to_js(err: AppError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn js_error(action: &str, err: JsValue) -> AppError {
    AppError::custom(format!("Failed to {action}: {err:?}"))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn mount(extra: &str) {
        let body = document().body().unwrap();
        body.set_inner_html(&format!(
            r#"<input id="player-input"><div id="player-tags"></div><input type="hidden" id="players_json">{extra}"#
        ));
    }

    fn players() -> JsValue {
        serde_wasm_bindgen::to_value(&vec![Candidate::new(1, "Alice"), Candidate::new(2, "Bob")])
            .unwrap()
    }

    fn hidden_value() -> String {
        find_input(&document(), "players_json").unwrap().value()
    }

    fn click_dismiss(id: PlayerId) {
        let selector = format!("button[{}=\"{id}\"]", tags::ID_ATTRIBUTE);
        let button = document().query_selector(&selector).unwrap().unwrap();
        button.dyn_into::<HtmlElement>().unwrap().click();
    }

    #[wasm_bindgen_test]
    fn test_bind_reuses_existing_datalist() {
        mount(r#"<datalist id="players-list"><option value="stale"></option></datalist>"#);

        let mut view = DomView::bind(document(), &SelectorConfig::default()).unwrap();
        view.install_suggestions(&["Alice".to_string(), "Bob".to_string()]);

        let lists = document().query_selector_all("datalist#players-list").unwrap();
        assert_eq!(lists.length(), 1);
        let datalist = document().get_element_by_id("players-list").unwrap();
        assert_eq!(datalist.children().length(), 2);

        let input = find_input(&document(), "player-input").unwrap();
        assert_eq!(input.get_attribute("list").as_deref(), Some("players-list"));
    }

    #[wasm_bindgen_test]
    fn test_bind_reports_missing_element() {
        document().body().unwrap().set_inner_html(r#"<input id="player-input">"#);

        let err = DomView::bind(document(), &SelectorConfig::default()).err().unwrap();
        assert_eq!(err.to_string(), "Configuration error: element #player-tags not found");
    }

    #[wasm_bindgen_test]
    fn test_dismiss_click_removes_player() {
        mount("");
        let preselected = serde_wasm_bindgen::to_value(&vec![1i64, 2]).unwrap();
        let handle = init_autocomplete(players(), preselected, JsValue::UNDEFINED).unwrap();
        assert_eq!(hidden_value(), "[1,2]");

        click_dismiss(1);
        assert_eq!(hidden_value(), "[2]");
        assert_eq!(handle.hidden_value(), "[2]");
    }

    #[wasm_bindgen_test]
    fn test_dropping_handle_detaches_listeners() {
        mount("");
        let preselected = serde_wasm_bindgen::to_value(&vec![1i64, 2]).unwrap();
        let handle = init_autocomplete(players(), preselected, JsValue::UNDEFINED).unwrap();
        drop(handle);

        // A click after drop must not reach the freed closure
        click_dismiss(1);
        assert_eq!(hidden_value(), "[1,2]");
    }
}
