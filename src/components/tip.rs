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

/// One-time hint pointing at the eye-toggle button.
///
/// Shown once the player is ready, until the user clicks the toggle for the
/// first time. Purely decorative, clicks pass through it.
#[function_component]
pub fn OnboardingTip() -> Html {
    html! {
        <div class="onboarding-tip">
            <div class="tip-content">
                <p>{"Click this button to hide the progress bar"}</p>
                <svg class="arrow" viewBox="0 0 50 50" width="40" height="40">
                    <path d="M10,10 L30,25 L10,40" />
                </svg>
            </div>
        </div>
    }
}
