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
use yew::suspense::Suspense;

use crate::components::options::PlayerOptions;
use crate::components::player::PlayerManager;
use crate::components::tip::OnboardingTip;
use crate::components::title::VideoTitle;
use crate::components::video_form::VideoForm;
use crate::constants::DEFAULT_VIDEO_ID;
use crate::contexts::SettingsContext;

#[function_component]
pub fn HomePage() -> Html {
    let settings_context: SettingsContext = use_context().expect("HomePage should be placed inside a SettingsProvider");
    let settings = *settings_context.settings();

    let video_id = use_state_eq(|| AttrValue::Static(DEFAULT_VIDEO_ID));
    let progress_shown = use_state_eq(|| true);
    let player_ready = use_state_eq(|| false);
    // the tip is dismissed for good on the first toggle
    let show_tip = use_state_eq(|| true);

    let on_submit = {
        let video_id = video_id.clone();
        Callback::from(move |id: AttrValue| video_id.set(id))
    };
    let on_ready = {
        let player_ready = player_ready.clone();
        Callback::from(move |()| player_ready.set(true))
    };
    let on_toggle = {
        let progress_shown = progress_shown.clone();
        let show_tip = show_tip.clone();
        Callback::from(move |shown: bool| {
            progress_shown.set(shown);
            show_tip.set(false);
        })
    };

    let title_fallback = html! {
        <h2 class="video-title"><em>{"Loading title..."}</em></h2>
    };

    html! {
        <>
            <Suspense fallback={title_fallback}>
                <VideoTitle video_id={(*video_id).clone()} />
            </Suspense>
            <div class="player-wrap">
                <PlayerManager
                    video_id={(*video_id).clone()}
                    hide_strategy={settings.hide_strategy}
                    icon_style={settings.icon_style}
                    {on_ready}
                    {on_toggle}
                />
                if *show_tip && *player_ready {
                    <OnboardingTip />
                }
            </div>
            <VideoForm {on_submit} />
            <p class="progress-status">
                { if *progress_shown {
                    "Progress bar is visible. Click the eye icon next to fullscreen to hide it."
                } else {
                    "Progress bar is hidden. Click the eye icon to show it."
                } }
            </p>
            <PlayerOptions />
        </>
    }
}
