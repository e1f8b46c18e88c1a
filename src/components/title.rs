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

use gloo_console::error;
use yew::prelude::*;

use crate::hooks::use_async_suspension;
use crate::oembed;

#[derive(Properties, PartialEq, Clone)]
pub struct VideoTitleProps {
    pub video_id: AttrValue,
}

/// The title of the current video, fetched from the oembed endpoint.
///
/// Suspends while the request is in flight. A failed fetch renders a
/// placeholder, the player doesn't care either way.
#[function_component]
pub fn VideoTitle(props: &VideoTitleProps) -> HtmlResult {
    let info = use_async_suspension(|vid| async move {
        let result = oembed::get_oembed_info(&vid).await;
        if let Err(ref err) = result {
            error!(format!("Failed to fetch metadata for video {vid}: {err:?}"));
        }
        result
    }, props.video_id.clone())?;

    Ok(match *info {
        Ok(ref info) => html! {
            <h2 class="video-title" title={format!("Uploaded by {}", info.author_name)}>
                {info.title.clone()}
            </h2>
        },
        Err(..) => html! {
            <h2 class="video-title"><em>{"Failed to fetch the video title"}</em></h2>
        },
    })
}
