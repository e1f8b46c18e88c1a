/* This file is part of the VeilPlayer project - https://github.com/veilplayer/veilplayer
*
*  Copyright (C) 2026 the VeilPlayer authors
*
*  This program is free software: you can redistribute it and/or modify
*  it under the terms of the GNU Affero General Public License as published by
*  the Free Software Foundation, either version 3 of the License, or
*  (at your option) any later version.
*
*  This program is distributed in the hope that it will be useful,
*  but WITHOUT ANY WARRANTY; without even the implied warranty of
*  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
*  GNU Affero General Public License for more details.
*
*  You should have received a copy of the GNU Affero General Public License
*  along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/
//! Browser tests for the control bar plumbing, run against a synthetic
//! control bar shaped like the one plyr generates.
#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use veilplayer::components::video_form::{VideoForm, VideoFormProps};
use veilplayer::controls::{apply_visibility, mount_toggle_button};
use veilplayer::visibility::{HideStrategy, IconStyle};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement};
use yew::platform::time::sleep;
use yew::{AttrValue, Callback};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .expect("the test should run in a browser")
        .document()
        .expect("the browser should have a document")
}

/// Builds a detached copy of the parts of plyr's control bar we touch and
/// attaches it to the body.
fn build_control_bar(with_fullscreen: bool) -> Element {
    let document = document();
    let controls = document.create_element("div").unwrap();
    controls.set_class_name("plyr__controls");

    let progress = document.create_element("div").unwrap();
    progress.set_class_name("plyr__progress__container");
    controls.append_child(&progress).unwrap();

    let time = document.create_element("div").unwrap();
    time.set_class_name("plyr__time plyr__time--current");
    controls.append_child(&time).unwrap();

    if with_fullscreen {
        let fullscreen = document.create_element("button").unwrap();
        fullscreen.set_attribute("data-plyr", "fullscreen").unwrap();
        controls.append_child(&fullscreen).unwrap();
    }

    document.body().unwrap().append_child(&controls).unwrap();
    controls
}

fn style_of(controls: &Element, selector: &str) -> CssStyleDeclaration {
    controls
        .query_selector(selector)
        .unwrap()
        .expect("the selector should match an element")
        .unchecked_into::<HtmlElement>()
        .style()
}

#[wasm_bindgen_test]
fn button_lands_before_the_fullscreen_control() {
    let controls = build_control_bar(true);
    let button = mount_toggle_button(&controls, true, IconStyle::Outline, &Callback::noop())
        .expect("mounting into a fresh bar should succeed");

    let element = controls
        .query_selector(".plyr__eye-toggle")
        .unwrap()
        .expect("the button should be in the bar");
    let next = element
        .next_element_sibling()
        .expect("the button should not be the last control");
    assert_eq!(next.get_attribute("data-plyr").as_deref(), Some("fullscreen"));
    assert_eq!(element.get_attribute("aria-label").as_deref(), Some("Hide progress"));
    assert_eq!(element.get_attribute("type").as_deref(), Some("button"));

    drop(button);
    controls.remove();
}

#[wasm_bindgen_test]
fn button_is_appended_when_there_is_no_fullscreen_control() {
    let controls = build_control_bar(false);
    let button = mount_toggle_button(&controls, true, IconStyle::Outline, &Callback::noop())
        .expect("mounting into a fresh bar should succeed");

    let last = controls
        .last_element_child()
        .expect("the bar should have children");
    assert!(last.class_name().contains("plyr__eye-toggle"));

    drop(button);
    controls.remove();
}

#[wasm_bindgen_test]
fn mounting_a_second_button_is_refused() {
    let controls = build_control_bar(true);
    let button = mount_toggle_button(&controls, true, IconStyle::Outline, &Callback::noop())
        .expect("the first mount should succeed");

    assert!(mount_toggle_button(&controls, true, IconStyle::Outline, &Callback::noop()).is_err());
    assert_eq!(
        controls.query_selector_all(".plyr__eye-toggle").unwrap().length(),
        1
    );

    drop(button);
    controls.remove();
}

#[wasm_bindgen_test]
fn clicking_the_button_fires_the_callback() {
    let controls = build_control_bar(true);
    let count = Rc::new(Cell::new(0u32));
    let on_toggle = {
        let count = count.clone();
        Callback::from(move |()| count.set(count.get() + 1))
    };
    let button = mount_toggle_button(&controls, true, IconStyle::Outline, &on_toggle)
        .expect("mounting into a fresh bar should succeed");

    let element: HtmlElement = controls
        .query_selector(".plyr__eye-toggle")
        .unwrap()
        .unwrap()
        .unchecked_into();
    element.click();
    assert_eq!(count.get(), 1);
    element.click();
    assert_eq!(count.get(), 2);

    drop(button);
    controls.remove();
}

#[wasm_bindgen_test]
fn dropping_the_button_removes_it_and_detaches_the_listener() {
    let controls = build_control_bar(true);
    let count = Rc::new(Cell::new(0u32));
    let on_toggle = {
        let count = count.clone();
        Callback::from(move |()| count.set(count.get() + 1))
    };
    let button = mount_toggle_button(&controls, true, IconStyle::Outline, &on_toggle)
        .expect("mounting into a fresh bar should succeed");

    let element: HtmlElement = controls
        .query_selector(".plyr__eye-toggle")
        .unwrap()
        .unwrap()
        .unchecked_into();
    element.click();
    assert_eq!(count.get(), 1);

    drop(button);
    assert!(controls.query_selector(".plyr__eye-toggle").unwrap().is_none());
    // a click on the detached node must not reach the dead listener
    element.click();
    assert_eq!(count.get(), 1);

    controls.remove();
}

#[wasm_bindgen_test]
fn set_state_swaps_the_icon_and_label() {
    let controls = build_control_bar(true);
    let button = mount_toggle_button(&controls, true, IconStyle::Outline, &Callback::noop())
        .expect("mounting into a fresh bar should succeed");

    let element = controls.query_selector(".plyr__eye-toggle").unwrap().unwrap();
    let shown_icon = element.inner_html();

    button.set_state(false, IconStyle::Outline);
    assert_eq!(element.get_attribute("aria-label").as_deref(), Some("Show progress"));
    assert_ne!(element.inner_html(), shown_icon);

    button.set_state(true, IconStyle::Outline);
    assert_eq!(element.get_attribute("aria-label").as_deref(), Some("Hide progress"));
    assert_eq!(element.inner_html(), shown_icon);

    drop(button);
    controls.remove();
}

#[wasm_bindgen_test]
fn hiding_preserves_the_reserved_space() {
    let controls = build_control_bar(true);
    apply_visibility(&controls, false, HideStrategy::PreserveLayout).expect("hiding should succeed");

    let progress = style_of(&controls, ".plyr__progress__container");
    assert_eq!(progress.get_property_value("visibility").unwrap(), "hidden");
    assert_eq!(progress.get_property_value("opacity").unwrap(), "0");
    assert_eq!(progress.get_property_value("pointer-events").unwrap(), "none");
    assert_eq!(progress.get_property_value("min-width").unwrap(), "1px");
    assert_eq!(progress.get_property_value("display").unwrap(), "");

    let time = style_of(&controls, ".plyr__time--current");
    assert_eq!(time.get_property_value("visibility").unwrap(), "hidden");
    assert_eq!(time.get_property_value("opacity").unwrap(), "0");
    // the time display is not interactive, its pointer behavior is left alone
    assert_eq!(time.get_property_value("pointer-events").unwrap(), "");

    apply_visibility(&controls, true, HideStrategy::PreserveLayout).expect("showing should succeed");
    assert_eq!(progress.get_property_value("visibility").unwrap(), "visible");
    assert_eq!(progress.get_property_value("opacity").unwrap(), "1");
    assert_eq!(progress.get_property_value("pointer-events").unwrap(), "auto");
    assert_eq!(progress.get_property_value("min-width").unwrap(), "");
    assert_eq!(time.get_property_value("visibility").unwrap(), "visible");

    controls.remove();
}

#[wasm_bindgen_test]
fn collapse_strategy_uses_display_none() {
    let controls = build_control_bar(true);
    apply_visibility(&controls, false, HideStrategy::Collapse).expect("hiding should succeed");

    let progress = style_of(&controls, ".plyr__progress__container");
    assert_eq!(progress.get_property_value("display").unwrap(), "none");
    assert_eq!(progress.get_property_value("min-width").unwrap(), "");
    assert_eq!(style_of(&controls, ".plyr__time--current").get_property_value("display").unwrap(), "none");

    apply_visibility(&controls, true, HideStrategy::Collapse).expect("showing should succeed");
    assert_eq!(progress.get_property_value("display").unwrap(), "");

    controls.remove();
}

#[wasm_bindgen_test]
async fn blank_submissions_are_dropped_and_keep_the_typed_text() {
    let document = document();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    let submitted = Rc::new(RefCell::new(Vec::<AttrValue>::new()));
    let on_submit = {
        let submitted = submitted.clone();
        Callback::from(move |id| submitted.borrow_mut().push(id))
    };
    let app = yew::Renderer::<VideoForm>::with_root_and_props(
        root.clone(),
        VideoFormProps { on_submit },
    )
    .render();
    sleep(Duration::from_millis(10)).await;

    let input: HtmlInputElement = root
        .query_selector("input")
        .unwrap()
        .expect("the form should render an input")
        .unchecked_into();
    let form: HtmlFormElement = root
        .query_selector("form")
        .unwrap()
        .expect("the form should render")
        .unchecked_into();

    input.set_value("   ");
    form.request_submit().unwrap();
    sleep(Duration::from_millis(10)).await;
    assert!(submitted.borrow().is_empty(), "a whitespace-only submission should be dropped");
    assert_eq!(input.value(), "   ", "a rejected submission should keep the typed text");

    app.destroy();
    root.remove();
}

#[wasm_bindgen_test]
async fn a_submitted_url_is_resolved_emitted_and_the_field_cleared() {
    let document = document();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    let submitted = Rc::new(RefCell::new(Vec::<AttrValue>::new()));
    let on_submit = {
        let submitted = submitted.clone();
        Callback::from(move |id| submitted.borrow_mut().push(id))
    };
    let app = yew::Renderer::<VideoForm>::with_root_and_props(
        root.clone(),
        VideoFormProps { on_submit },
    )
    .render();
    sleep(Duration::from_millis(10)).await;

    let input: HtmlInputElement = root
        .query_selector("input")
        .unwrap()
        .expect("the form should render an input")
        .unchecked_into();
    let form: HtmlFormElement = root
        .query_selector("form")
        .unwrap()
        .expect("the form should render")
        .unchecked_into();

    input.set_value("https://youtu.be/xyz987?si=token");
    form.request_submit().unwrap();
    sleep(Duration::from_millis(10)).await;
    {
        let submitted = submitted.borrow();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].as_str(), "xyz987");
    }
    assert_eq!(input.value(), "", "an accepted submission should clear the field");

    app.destroy();
    root.remove();
}

#[wasm_bindgen_test]
fn a_bar_without_progress_or_time_is_fine() {
    let document = document();
    let controls = document.create_element("div").unwrap();
    controls.set_class_name("plyr__controls");
    document.body().unwrap().append_child(&controls).unwrap();

    apply_visibility(&controls, false, HideStrategy::PreserveLayout)
        .expect("an empty bar should not be an error");

    controls.remove();
}
