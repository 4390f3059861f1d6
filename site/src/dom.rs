//! DOM wiring for the marketing page. Browser only.
//!
//! SYSTEM CONTEXT
//! ==============
//! `install` runs once from the wasm start hook and attaches page-lifetime
//! listeners; their closures are leaked on purpose since the page never
//! tears them down. Each listener reads the DOM, asks the pure modules what
//! to do, and writes the answer back as inline styles or classes.
//!
//! ERROR HANDLING
//! ==============
//! Missing optional elements skip their effect. DOM call failures inside
//! listeners are logged through `report` and never abort the listener.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Blob, BlobPropertyBag, Document, Element, Event, EventTarget, HtmlAnchorElement, HtmlButtonElement, HtmlElement,
    HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Node, NodeList, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Url,
    Window,
};

use std::cell::Cell;
use std::rc::Rc;

use crate::consts::{
    ANIMATED_CLASS, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD, SENDING_LABEL, SKILL_BAR_DELAY_MS,
    SKILLS_THRESHOLD, TOAST_EXIT_MS, TOAST_VISIBLE_MS,
};
use crate::echo::{BrowserStorage, LocalEcho};
use crate::effects::{HoverTarget, REVEAL_HIDDEN, REVEAL_SHOWN, SkillBarAnimation, should_animate_skills};
use crate::form::{ContactForm, MISSING_FIELDS_ALERT, SubmitOutcome};
use crate::menu::{ACTIVE_CLASS, MenuState};
use crate::net;
use crate::scroll::{ScrollTracker, SectionBox, active_section, link_colors, parallax_offset, parallax_transform};
use crate::toast::{TOAST_KEYFRAMES, Toast};

/// Wire every page behavior.
///
/// # Errors
///
/// Returns the first DOM error hit while attaching listeners.
pub fn install() -> Result<(), JsValue> {
    let window = window()?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    inject_keyframes(&document)?;
    wire_menu(&document)?;
    wire_smooth_scroll(&document)?;
    wire_reveal(&document)?;
    wire_skill_bars(&document)?;
    wire_scroll(&window, &document)?;
    wire_hover(&document)?;
    wire_contact_form(&document)?;
    Ok(())
}

/// Local echo over `window.localStorage`.
///
/// # Errors
///
/// Returns an error when storage is unavailable.
pub fn browser_echo() -> Result<LocalEcho<BrowserStorage>, JsValue> {
    BrowserStorage::local()
        .map(LocalEcho::new)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Trigger a download of `json` named `filename`.
///
/// # Errors
///
/// Returns an error if the blob, object URL or link cannot be created.
pub fn download_json(filename: &str, json: &str) -> Result<(), JsValue> {
    let document = window()?.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(json));
    let bag = BlobPropertyBag::new();
    bag.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &bag)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(&url);
    link.set_download(filename);
    body.append_child(&link)?;
    link.click();
    link.remove();
    Url::revoke_object_url(&url)
}

// =============================================================================
// HELPERS
// =============================================================================

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

fn report(result: Result<(), JsValue>, what: &str) {
    if let Err(e) = result {
        log::warn!("{what} failed: {e:?}");
    }
}

fn collect_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

fn elements(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    Ok(collect_elements(&document.query_selector_all(selector)?))
}

fn html_element(document: &Document, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_ref::<HtmlElement>().cloned()))
}

fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        report(html.style().set_property(property, value), "style update");
    }
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn observe_intersections(
    threshold: f64,
    root_margin: Option<&str>,
    mut on_entry: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
) -> Result<IntersectionObserver, JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() {
                    on_entry(entry, &observer);
                }
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    Ok(observer)
}

fn inject_keyframes(document: &Document) -> Result<(), JsValue> {
    let style = document.create_element("style")?;
    style.set_text_content(Some(TOAST_KEYFRAMES));
    if let Some(head) = document.head() {
        head.append_child(&style)?;
    }
    Ok(())
}

// =============================================================================
// MENU + SMOOTH SCROLL
// =============================================================================

fn wire_menu(document: &Document) -> Result<(), JsValue> {
    let (Some(hamburger), Some(nav_menu)) = (document.query_selector(".hamburger")?, document.query_selector(".nav-menu")?)
    else {
        return Ok(());
    };

    let toggle = hamburger.clone();
    let state = Rc::new(Cell::new(MenuState::new()));
    let apply: Rc<dyn Fn(bool)> = Rc::new(move |open: bool| {
        for el in [&hamburger, &nav_menu] {
            report(el.class_list().toggle_with_force(ACTIVE_CLASS, open).map(|_| ()), "menu toggle");
        }
    });

    {
        let (state, apply) = (Rc::clone(&state), Rc::clone(&apply));
        listen(&toggle, "click", move |_| {
            let mut menu = state.get();
            let open = menu.toggle();
            state.set(menu);
            apply(open);
        })?;
    }

    for link in elements(document, ".nav-link")? {
        let (state, apply) = (Rc::clone(&state), Rc::clone(&apply));
        listen(&link, "click", move |_| {
            let mut menu = state.get();
            if menu.close() {
                state.set(menu);
                apply(false);
            }
        })?;
    }

    let nav_container = document.query_selector(".nav-container")?;
    listen(document, "click", move |event| {
        let target = event.target().and_then(|t| t.dyn_ref::<Node>().cloned());
        let inside_nav = nav_container
            .as_ref()
            .is_some_and(|nav| nav.contains(target.as_ref()));
        let mut menu = state.get();
        if menu.on_document_click(inside_nav) {
            state.set(menu);
            apply(false);
        }
    })
}

fn wire_smooth_scroll(document: &Document) -> Result<(), JsValue> {
    for anchor in elements(document, "a[href^=\"#\"]")? {
        let doc = document.clone();
        let source = anchor.clone();
        listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = source.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector; treat it like a missing target.
            if let Ok(Some(target)) = doc.query_selector(&href) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })?;
    }
    Ok(())
}

// =============================================================================
// REVEAL + SKILL BARS
// =============================================================================

fn wire_reveal(document: &Document) -> Result<(), JsValue> {
    let targets = elements(document, REVEAL_SELECTOR)?;
    if targets.is_empty() {
        return Ok(());
    }

    let observer = observe_intersections(REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let target = entry.target();
        for (property, value) in REVEAL_SHOWN {
            set_style(&target, property, value);
        }
        observer.unobserve(&target);
    })?;

    for el in targets {
        for (property, value) in REVEAL_HIDDEN {
            set_style(&el, property, value);
        }
        observer.observe(&el);
    }
    Ok(())
}

fn wire_skill_bars(document: &Document) -> Result<(), JsValue> {
    let Some(section) = document.get_element_by_id("skills") else {
        return Ok(());
    };
    if section.query_selector_all(".skill-progress")?.length() == 0 {
        return Ok(());
    }

    let observer = observe_intersections(SKILLS_THRESHOLD, None, |entry, _| {
        let target = entry.target();
        let already = target.class_list().contains(ANIMATED_CLASS);
        if !should_animate_skills(entry.is_intersecting(), already) {
            return;
        }
        match target.query_selector_all(".skill-progress") {
            Ok(bars) => collect_elements(&bars).iter().for_each(animate_skill_bar),
            Err(e) => log::warn!("skill bar lookup failed: {e:?}"),
        }
        report(target.class_list().add_1(ANIMATED_CLASS), "skills mark");
    })?;
    observer.observe(&section);
    Ok(())
}

fn animate_skill_bar(bar: &Element) {
    let Some(html) = bar.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = html.style();
    let authored = style.get_property_value("width").unwrap_or_default();
    let Some(animation) = SkillBarAnimation::new(&authored) else {
        return;
    };
    report(style.set_property("width", SkillBarAnimation::collapsed_width()), "skill bar reset");
    Timeout::new(SKILL_BAR_DELAY_MS, move || {
        report(style.set_property("transition", SkillBarAnimation::transition()), "skill bar transition");
        report(style.set_property("width", &animation.target_width), "skill bar width");
    })
    .forget();
}

// =============================================================================
// SCROLL + HOVER
// =============================================================================

fn wire_scroll(window: &Window, document: &Document) -> Result<(), JsValue> {
    let navbar = html_element(document, ".navbar")?;
    let hero_gradient = html_element(document, ".hero-gradient")?;
    let sections: Vec<HtmlElement> = elements(document, "section")?
        .iter()
        .filter_map(|el| el.dyn_ref::<HtmlElement>().cloned())
        .collect();

    let win = window.clone();
    let doc = document.clone();
    let mut tracker = ScrollTracker::new();
    listen(window, "scroll", move |_| {
        let scroll_y = win.scroll_y().unwrap_or(0.0);

        if let Some(navbar) = &navbar {
            let style = tracker.on_scroll(scroll_y);
            let css = navbar.style();
            report(css.set_property("background", style.background), "navbar background");
            report(css.set_property("transform", style.transform), "navbar transform");
            if let Some(transition) = style.transition {
                report(css.set_property("transition", transition), "navbar transition");
            }
        }

        if let Some(hero) = &hero_gradient {
            let viewport = win.inner_height().map_or(0.0, |v| v.as_f64().unwrap_or(0.0));
            if let Some(offset) = parallax_offset(scroll_y, viewport) {
                report(hero.style().set_property("transform", &parallax_transform(offset)), "parallax");
            }
        }

        update_nav_links(&doc, &sections, scroll_y);
    })
}

fn update_nav_links(document: &Document, sections: &[HtmlElement], scroll_y: f64) {
    let boxes: Vec<SectionBox> = sections
        .iter()
        .filter(|s| !s.id().is_empty())
        .map(|s| SectionBox::new(s.id(), f64::from(s.offset_top()), f64::from(s.offset_height())))
        .collect();

    let active = active_section(&boxes, scroll_y);
    if active.is_some() {
        match elements(document, ".nav-link") {
            Ok(links) => {
                for link in links {
                    report(link.class_list().remove_1(ACTIVE_CLASS), "nav link class");
                }
            }
            Err(e) => log::warn!("nav link lookup failed: {e:?}"),
        }
    }

    for (id, color) in link_colors(&boxes, active) {
        if let Ok(Some(link)) = document.query_selector(&format!("a[href=\"#{id}\"]")) {
            set_style(&link, "color", color);
        }
    }
}

fn wire_hover(document: &Document) -> Result<(), JsValue> {
    for target in [HoverTarget::Button, HoverTarget::ServiceCard] {
        for el in elements(document, target.selector())? {
            for (event, entering) in [("mouseenter", true), ("mouseleave", false)] {
                let source = el.clone();
                listen(&el, event, move |_| set_style(&source, "transform", target.transform(entering)))?;
            }
        }
    }
    Ok(())
}

// =============================================================================
// CONTACT FORM
// =============================================================================

fn wire_contact_form(document: &Document) -> Result<(), JsValue> {
    let Some(form_el) = document
        .get_element_by_id("contactForm")
        .and_then(|el| el.dyn_ref::<HtmlFormElement>().cloned())
    else {
        return Ok(());
    };

    let doc = document.clone();
    let target = form_el.clone();
    listen(&target, "submit", move |event| {
        event.prevent_default();

        let form = match ContactForm::from_inputs(
            &field_value(&doc, "name"),
            &field_value(&doc, "email"),
            &field_value(&doc, "message"),
        ) {
            Ok(form) => form,
            Err(_) => {
                alert(MISSING_FIELDS_ALERT);
                return;
            }
        };

        let button = submit_button(&form_el);
        let original_label = button.as_ref().and_then(|b| b.text_content()).unwrap_or_default();
        if let Some(button) = &button {
            button.set_text_content(Some(SENDING_LABEL));
            button.set_disabled(true);
        }

        let doc = doc.clone();
        let form_el = form_el.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let reply = net::post_contact(&form).await;
            if let Err(e) = &reply {
                log::error!("contact submit failed: {e}");
            }
            let outcome = SubmitOutcome::from_reply(reply);
            record_echo(&outcome, &form);
            show_toast(&doc, &outcome.toast());

            if let Some(button) = &button {
                button.set_text_content(Some(&original_label));
                button.set_disabled(false);
            }
            form_el.reset();
        });
    })
}

fn field_value(document: &Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn submit_button(form: &HtmlFormElement) -> Option<HtmlButtonElement> {
    match form.query_selector("button[type=\"submit\"]") {
        Ok(Some(el)) => el.dyn_ref::<HtmlButtonElement>().cloned(),
        _ => None,
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        report(window.alert_with_message(message), "alert");
    }
}

fn record_echo(outcome: &SubmitOutcome, form: &ContactForm) {
    let echo = match browser_echo() {
        Ok(echo) => echo,
        Err(e) => {
            log::error!("local echo unavailable: {e:?}");
            return;
        }
    };
    match echo.append(outcome.echo_entry(form)) {
        Ok(count) => log::info!("form data saved to localStorage ({count} entries)"),
        Err(e) => log::error!("error saving to localStorage: {e}"),
    }
}

fn show_toast(document: &Document, toast: &Toast) {
    let Some(body) = document.body() else {
        return;
    };
    let banner = match document.create_element("div") {
        Ok(el) => el,
        Err(e) => {
            log::warn!("toast create failed: {e:?}");
            return;
        }
    };
    let Some(banner) = banner.dyn_ref::<HtmlElement>().cloned() else {
        return;
    };
    banner.style().set_css_text(&toast.css_text());
    banner.set_text_content(Some(toast.text()));
    report(body.append_child(&banner).map(|_| ()), "toast insert");

    Timeout::new(TOAST_VISIBLE_MS, move || {
        report(banner.style().set_property("animation", &Toast::exit_animation()), "toast exit");
        Timeout::new(TOAST_EXIT_MS, move || banner.remove()).forget();
    })
    .forget();
}
