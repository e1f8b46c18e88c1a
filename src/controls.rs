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

use cloneable_errors::{bail, ErrorContext, ResContext};
use gloo_console::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement};
use yew::Callback;

use crate::utils::{EventListener, JsError};
use crate::visibility::{progress_rules, time_rules, toggle_icon, toggle_label, HideStrategy, IconStyle, StyleRule};

// all knowledge of plyr's generated DOM lives here
const TOGGLE_SELECTOR: &str = ".plyr__eye-toggle";
const FULLSCREEN_SELECTOR: &str = "[data-plyr=\"fullscreen\"]";
const PROGRESS_SELECTOR: &str = ".plyr__progress__container";
const TIME_SELECTOR: &str = ".plyr__time--current";

/// The custom eye-toggle button mounted into plyr's control bar.
///
/// Dropping this removes the button from the DOM and detaches its click
/// listener.
pub struct ToggleButton {
    element: HtmlElement,
    _click: EventListener<dyn FnMut(Event)>,
}

impl ToggleButton {
    /// Syncs the icon and accessible label with the given state
    pub fn set_state(&self, shown: bool, icon_style: IconStyle) {
        self.element.set_inner_html(toggle_icon(icon_style, shown));
        if let Err(err) = self.element.set_attribute("aria-label", toggle_label(shown)) {
            warn!("Failed to update the toggle button label", err);
        }
    }
}

impl Drop for ToggleButton {
    fn drop(&mut self) {
        self.element.remove();
    }
}

/// Inserts the eye-toggle button into plyr's control bar.
///
/// The button lands right before the fullscreen control, or at the end of the
/// bar if there is no fullscreen control. Mounting a second button into the
/// same bar is refused.
pub fn mount_toggle_button(
    controls: &Element,
    shown: bool,
    icon_style: IconStyle,
    on_toggle: &Callback<()>,
) -> Result<ToggleButton, ErrorContext> {
    if controls
        .query_selector(TOGGLE_SELECTOR)
        .map_err(JsError::from)
        .context("Duplicate button lookup failed")?
        .is_some()
    {
        bail!("The control bar already has a toggle button");
    }

    let document = controls
        .owner_document()
        .context("The control bar has no owner document")?;
    let button: HtmlElement = document
        .create_element("button")
        .map_err(JsError::from)
        .context("Failed to create the button element")?
        .unchecked_into();
    button.set_class_name("plyr__control plyr__eye-toggle");
    button.set_id("plyr-eye-toggle-btn");
    for (name, value) in [("type", "button"), ("data-plyr", "eye-toggle"), ("aria-label", toggle_label(shown))] {
        button
            .set_attribute(name, value)
            .map_err(JsError::from)
            .with_context(|| format!("Failed to set the button {name} attribute"))?;
    }
    button.set_inner_html(toggle_icon(icon_style, shown));

    let on_toggle = on_toggle.clone();
    let click = EventListener::new(
        &button,
        "click",
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            event.stop_propagation();
            on_toggle.emit(());
        }),
    )
    .map_err(JsError::from)
    .context("Failed to attach the click listener")?;

    let fullscreen = controls
        .query_selector(FULLSCREEN_SELECTOR)
        .map_err(JsError::from)
        .context("Fullscreen control lookup failed")?;
    match fullscreen {
        Some(fullscreen) => controls.insert_before(&button, Some(&fullscreen)),
        None => controls.append_child(&button),
    }
    .map_err(JsError::from)
    .context("Failed to insert the button into the control bar")?;

    Ok(ToggleButton {
        element: button,
        _click: click,
    })
}

/// Applies the visibility state to the progress bar and time display.
///
/// Missing elements are skipped: plyr may have been configured without them,
/// and hiding nothing is not an error.
pub fn apply_visibility(controls: &Element, shown: bool, strategy: HideStrategy) -> Result<(), ErrorContext> {
    if let Some(progress) = query_control(controls, PROGRESS_SELECTOR)? {
        apply_rules(&progress, &progress_rules(shown, strategy))?;
        if strategy == HideStrategy::PreserveLayout {
            freeze_width(&progress, true).context("Failed to pin the progress container width")?;
        }
    }
    if let Some(time) = query_control(controls, TIME_SELECTOR)? {
        apply_rules(&time, &time_rules(shown, strategy))?;
        if strategy == HideStrategy::PreserveLayout && !shown {
            freeze_width(&time, false).context("Failed to pin the time display width")?;
        }
    }
    Ok(())
}

fn query_control(controls: &Element, selector: &str) -> Result<Option<HtmlElement>, ErrorContext> {
    Ok(controls
        .query_selector(selector)
        .map_err(JsError::from)
        .with_context(|| format!("Lookup for '{selector}' failed"))?
        .map(JsCast::unchecked_into))
}

fn apply_rules(element: &HtmlElement, rules: &[StyleRule]) -> Result<(), ErrorContext> {
    let style = element.style();
    for rule in rules {
        match rule.value {
            Some(value) => style.set_property(rule.property, value),
            None => style.remove_property(rule.property).map(|_| ()),
        }
        .map_err(JsError::from)
        .with_context(|| format!("Failed to apply the '{}' rule", rule.property))?;
    }
    Ok(())
}

/// Pins the element's width to its current rendered width.
///
/// This keeps the control bar from reflowing when an element is hidden while
/// its space is preserved. An already pinned width is left alone, so the bar's
/// layout stays identical across toggles.
fn freeze_width(element: &HtmlElement, always: bool) -> Result<(), ErrorContext> {
    let style = element.style();
    let current = style
        .get_property_value("width")
        .map_err(JsError::from)
        .context("Failed to read the current width")?;
    if !current.is_empty() {
        return Ok(());
    }
    let width = element.offset_width();
    if always || width > 0 {
        style
            .set_property("width", &format!("{width}px"))
            .map_err(JsError::from)
            .context("Failed to pin the width")?;
    }
    Ok(())
}
