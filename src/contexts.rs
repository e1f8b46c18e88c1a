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

use yew::html::ChildrenProps;
use yew::prelude::*;
use yew_hooks::use_local_storage;

use crate::constants::SETTINGS_KEY;
use crate::settings::Settings;

/// Read access to the active [`Settings`], plus a way to replace them.
#[derive(Clone, PartialEq)]
pub struct SettingsContext {
    current: Settings,
    update_callback: Callback<Settings>,
    /// Compiled-in defaults, for reverting individual fields
    pub default: Settings,
}

impl SettingsContext {
    pub fn settings(&self) -> &Settings {
        &self.current
    }

    /// Replaces the active settings and persists them
    pub fn update(&self, new_settings: Settings) {
        self.update_callback.emit(new_settings);
    }
}

#[function_component]
pub fn SettingsProvider(props: &ChildrenProps) -> Html {
    let stored = use_local_storage::<Settings>(SETTINGS_KEY.to_owned());
    let update_callback = {
        let stored = stored.clone();
        Callback::from(move |settings| stored.set(settings))
    };
    let context = SettingsContext {
        current: (*stored).unwrap_or_default(),
        update_callback,
        default: Settings::default(),
    };

    html! {
        <ContextProvider<SettingsContext> {context}>
            {props.children.clone()}
        </ContextProvider<SettingsContext>>
    }
}
