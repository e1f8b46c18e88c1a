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

use std::str::FromStr;

use gloo_console::warn;
use strum::IntoEnumIterator;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::contexts::SettingsContext;
use crate::visibility::{HideStrategy, IconStyle};

fn strategy_label(strategy: HideStrategy) -> &'static str {
    match strategy {
        HideStrategy::PreserveLayout => "keep its space (no layout shift)",
        HideStrategy::Collapse => "collapse (controls spread out)",
    }
}

fn icon_style_label(style: IconStyle) -> &'static str {
    match style {
        IconStyle::Outline => "Outline",
        IconStyle::Filled => "Filled",
    }
}

/// Behaviour settings panel. Changes apply to the running player immediately
/// and are persisted through [`SettingsContext`].
#[function_component]
pub fn PlayerOptions() -> Html {
    let settings_context: SettingsContext = use_context().expect("PlayerOptions should be placed inside a SettingsProvider");
    let settings = *settings_context.settings();

    let on_strategy_change = use_callback(settings_context.clone(), |event: Event, settings_context| {
        let value = event.target_unchecked_into::<HtmlSelectElement>().value();
        let Ok(strategy) = HideStrategy::from_str(&value) else {
            warn!(format!("Ignoring an unknown hide strategy: {value}"));
            return;
        };
        let mut settings = *settings_context.settings();
        settings.hide_strategy = strategy;
        settings_context.update(settings);
    });
    let on_icon_change = use_callback(settings_context, |event: Event, settings_context| {
        let value = event.target_unchecked_into::<HtmlSelectElement>().value();
        let Ok(style) = IconStyle::from_str(&value) else {
            warn!(format!("Ignoring an unknown icon style: {value}"));
            return;
        };
        let mut settings = *settings_context.settings();
        settings.icon_style = style;
        settings_context.update(settings);
    });

    html! {
        <details class="player-options">
            <summary>{"Player options"}</summary>
            <fieldset>
                <legend>{"Progress toggle"}</legend>
                <div class="option-row">
                    <label for="hide-strategy">{"When hidden, the progress bar should"}</label>
                    <select id="hide-strategy" onchange={on_strategy_change}>
                        { for HideStrategy::iter().map(|strategy| html! {
                            <option value={strategy.to_string()} selected={strategy == settings.hide_strategy}>
                                {strategy_label(strategy)}
                            </option>
                        }) }
                    </select>
                </div>
                <div class="option-row">
                    <label for="icon-style">{"Eye icon style"}</label>
                    <select id="icon-style" onchange={on_icon_change}>
                        { for IconStyle::iter().map(|style| html! {
                            <option value={style.to_string()} selected={style == settings.icon_style}>
                                {icon_style_label(style)}
                            </option>
                        }) }
                    </select>
                </div>
            </fieldset>
        </details>
    }
}
