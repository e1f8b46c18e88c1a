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

use gloo_console::warn;
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use crate::resolver::resolve_video_id;

#[derive(Properties, PartialEq)]
pub struct VideoFormProps {
    pub on_submit: Callback<AttrValue>,
}

/// Input form for switching videos. Accepts urls or bare ids, resolved via
/// [`resolve_video_id`]. Empty submissions are ignored.
#[function_component]
pub fn VideoForm(props: &VideoFormProps) -> Html {
    let input_ref = use_node_ref();
    let onsubmit = {
        let input_ref = input_ref.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(input) = input_ref.cast::<HtmlInputElement>() else { return };
            let resolved = resolve_video_id(&input.value());
            if let Some(err) = resolved.error {
                warn!(format!("Failed to parse the submitted URL, falling back to the raw input: {err}"));
            }
            if resolved.is_empty() {
                return;
            }
            if !resolved.looks_canonical() {
                warn!(format!("'{}' does not look like a standard video id, trying it anyway", resolved.id));
            }
            on_submit.emit(resolved.id.into());
            input.set_value("");
        })
    };

    html! {
        <form class="video-form" {onsubmit}>
            <input ref={input_ref} type="text" placeholder="Enter YouTube video ID or URL" />
            <button type="submit">{"Play Video"}</button>
        </form>
    }
}
