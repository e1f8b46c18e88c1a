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
use yew_router::prelude::Link;

use crate::constants::{BUILD_TIME, COMMIT_LINK, VERSION_STRING};
use crate::pages::MainRoute;
use crate::utils::render_datetime_with_delta;

#[function_component]
pub fn Header() -> Html {
    html! {
        <div id="header">
            <Link<MainRoute> to={MainRoute::Home}><img src="/icon/logo.svg" alt="VeilPlayer logo" /></Link<MainRoute>>
            <div>
                <h1 class="undecorated-link"><Link<MainRoute> to={MainRoute::Home}>{"VeilPlayer"}</Link<MainRoute>></h1>
                <span class="tagline">{"watch without watching the clock"}</span>
            </div>
        </div>
    }
}

#[function_component]
pub fn Footer() -> Html {
    let build_info = match *BUILD_TIME {
        Some(time) => format!("Built {}", render_datetime_with_delta(time)),
        None => "Build time unknown".to_owned(),
    };

    html! {
        <div id="footer">
            <span title={build_info}>
                <a href={*COMMIT_LINK}>{format!("VeilPlayer v{}", *VERSION_STRING)}</a>
            </span>
            <span>
                {"Playback by "}
                <a href="https://plyr.io/">{"Plyr"}</a>
                {". VeilPlayer is licensed under "}
                <a href="https://www.gnu.org/licenses/agpl-3.0.en.html">{"AGPL v3"}</a>
                {"."}
            </span>
        </div>
    }
}
