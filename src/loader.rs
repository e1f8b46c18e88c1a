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

use std::cell::RefCell;

use cloneable_errors::{anyhow, ErrContext, ErrorContext, ResContext};
use futures::channel::oneshot;
use futures::future::{LocalBoxFuture, Shared};
use futures::{select_biased, FutureExt};
use gloo_console::log;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Event, HtmlLinkElement, HtmlScriptElement};
use yew::platform::time::sleep;

use crate::constants::{PLYR_SCRIPT_URL, PLYR_STYLESHEET_URL, SCRIPT_LOAD_TIMEOUT};
use crate::utils::JsError;

type AssetFuture = Shared<LocalBoxFuture<'static, Result<(), ErrorContext>>>;

thread_local! {
    static ASSET_LOAD: RefCell<Option<AssetFuture>> = RefCell::new(None);
}

/// Ensures the plyr stylesheet and script are present in the document.
///
/// Concurrent callers await the same load. A failed load is forgotten, so the
/// next call starts over instead of replaying a cached error.
pub async fn ensure_player_assets() -> Result<(), ErrorContext> {
    let future = ASSET_LOAD.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(|| load_player_assets().boxed_local().shared())
            .clone()
    });
    let result = future.clone().await;
    if result.is_err() {
        ASSET_LOAD.with(|slot| {
            let mut slot = slot.borrow_mut();
            if slot.as_ref().is_some_and(|pending| pending.ptr_eq(&future)) {
                *slot = None;
            }
        });
    }
    result
}

async fn load_player_assets() -> Result<(), ErrorContext> {
    let document = window()
        .context("Failed to get the window object")?
        .document()
        .context("Failed to get the document object")?;

    ensure_stylesheet(&document).context("Failed to inject the plyr stylesheet")?;
    ensure_script(&document).await.context("Failed to load the plyr script")?;
    Ok(())
}

fn ensure_stylesheet(document: &Document) -> Result<(), ErrorContext> {
    if document
        .query_selector("link[href*=\"plyr.css\"]")
        .map_err(JsError::from)
        .context("Stylesheet lookup failed")?
        .is_some()
    {
        return Ok(());
    }
    log!("Injecting the plyr stylesheet");
    let link: HtmlLinkElement = document
        .create_element("link")
        .map_err(JsError::from)
        .context("Failed to create the link element")?
        .unchecked_into();
    link.set_rel("stylesheet");
    link.set_href(PLYR_STYLESHEET_URL);
    document
        .head()
        .context("The document has no head element")?
        .append_child(&link)
        .map_err(JsError::from)
        .context("Failed to append the link element")?;
    Ok(())
}

async fn ensure_script(document: &Document) -> Result<(), ErrorContext> {
    if document
        .query_selector("script[src*=\"plyr.polyfilled.js\"]")
        .map_err(JsError::from)
        .context("Script lookup failed")?
        .is_some()
    {
        return Ok(());
    }

    log!("Fetching the plyr script");
    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(JsError::from)
        .context("Failed to create the script element")?
        .unchecked_into();
    script.set_src(PLYR_SCRIPT_URL);

    let (load_sender, load_receiver) = oneshot::channel::<()>();
    let (error_sender, error_receiver) = oneshot::channel::<()>();
    let onload = Closure::once(move |_: Event| {
        let _ = load_sender.send(());
    });
    let onerror = Closure::once(move |_: Event| {
        let _ = error_sender.send(());
    });
    script.set_onload(Some(onload.as_ref().unchecked_ref()));
    script.set_onerror(Some(onerror.as_ref().unchecked_ref()));

    document
        .head()
        .context("The document has no head element")?
        .append_child(&script)
        .map_err(JsError::from)
        .context("Failed to append the script element")?;

    let result = select_biased! {
        msg = load_receiver.fuse() => msg.context("The script load signal was cancelled"),
        msg = error_receiver.fuse() => match msg {
            // script error events carry no detail beyond "it failed"
            Ok(()) => Err(anyhow!("The script at {PLYR_SCRIPT_URL} failed to load")),
            Err(err) => Err(err.context("The script error signal was cancelled")),
        },
        () = sleep(SCRIPT_LOAD_TIMEOUT).fuse() => Err(anyhow!("Timed out waiting for the plyr script")),
    };
    script.set_onload(None);
    script.set_onerror(None);
    if result.is_err() {
        script.remove();
    }
    result
}
