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

use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod constants;
pub mod contexts;
pub mod controls;
pub mod hooks;
pub mod loader;
pub mod oembed;
pub mod pages;
pub mod plyr;
pub mod resolver;
pub mod settings;
pub mod utils;
pub mod visibility;

pub mod built_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

use crate::contexts::SettingsProvider;
use crate::pages::{render_main_route, MainRoute};

#[function_component]
pub fn App() -> Html {
    html! {
        <SettingsProvider>
            <BrowserRouter>
                <Switch<MainRoute> render={render_main_route} />
            </BrowserRouter>
        </SettingsProvider>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
