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

use std::fmt::{self, Display};

use chrono::{DateTime, FixedOffset, Utc};
use cloneable_errors::{bail, ErrorContext, ResContext};
use reqwest::{IntoUrl, Response, Url};
use serde::Deserialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{JsString, Object, Reflect};
use web_sys::{AbortController, AbortSignal, AddEventListenerOptions, EventTarget};

use crate::constants::REQWEST_CLIENT;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[wasm_bindgen]
extern "C" {
    /// The JS `String()` constructor, for stringifying arbitrary values
    #[wasm_bindgen(js_name = String)]
    pub fn make_jsstring(value: &JsValue) -> JsString;
}

/// A JS exception flattened into a plain string.
///
/// [`ErrorContext`] causes must be `Send + Sync`, which a [`JsValue`] never
/// is, so the thrown value is stringified at the boundary instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsError {
    message: String,
}

impl From<&JsValue> for JsError {
    fn from(value: &JsValue) -> Self {
        let message = if let Some(error) = value.dyn_ref::<web_sys::js_sys::Error>() {
            format!("JS error: {}: {}", error.name(), error.message())
        } else if let Some(object) = value.dyn_ref::<Object>() {
            format!("JS pseudo-error: {}", object.to_string())
        } else {
            format!("JS pseudo-error: {}", make_jsstring(value))
        };
        Self { message }
    }
}

impl From<JsValue> for JsError {
    fn from(value: JsValue) -> Self {
        Self::from(&value)
    }
}

impl Display for JsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for JsError {}

/// Extensions for the `web_sys::AddEventListenerOptions` object
pub trait EventListenerOptionsExt {
    fn signal(&mut self, signal: &AbortSignal) -> &mut Self;
}

impl EventListenerOptionsExt for AddEventListenerOptions {
    fn signal(&mut self, signal: &AbortSignal) -> &mut Self {
        Reflect::set(self.as_ref(), &"signal".into(), signal).expect("setting signal property should work");
        self
    }
}

/// Represents a registered event listener
///
/// The listener is cancelled via the `AbortController` when this object is dropped
pub struct EventListener<F: ?Sized> {
    _closure: Closure<F>,
    abort: AbortController,
}

impl<F: ?Sized> EventListener<F> {
    pub fn new(target: &EventTarget, r#type: &str, closure: Closure<F>) -> Result<Self, JsValue> {
        let abort = AbortController::new()?;
        let mut options = AddEventListenerOptions::new();
        options.signal(&abort.signal());
        target.add_event_listener_with_callback_and_add_event_listener_options(
            r#type,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            _closure: closure,
            abort,
        })
    }

    pub fn stop(&self) {
        self.abort.abort();
    }
}

impl<F: ?Sized> Drop for EventListener<F> {
    fn drop(&mut self) {
        self.stop();
    }
}

pub fn render_datetime(dt: DateTime<FixedOffset>) -> String {
    format!("{} UTC", dt.with_timezone(&Utc).format(TIME_FORMAT))
}

pub fn render_datetime_with_delta(dt: DateTime<FixedOffset>) -> String {
    let delta = (Utc::now() - dt.with_timezone(&Utc)).num_days();
    format!("{} ({delta} days ago)", render_datetime(dt))
}

pub trait ReqwestUrlExt {
    /// Extends the URL's path segments with the given iterator
    #[allow(clippy::result_unit_err)]
    fn extend_segments<I>(&mut self, segments: I) -> Result<&mut Self, ()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>;
}

impl ReqwestUrlExt for Url {
    fn extend_segments<I>(&mut self, segments: I) -> Result<&mut Self, ()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        {
            let mut path = self.path_segments_mut()?;
            path.pop_if_empty().extend(segments);
        }
        Ok(self)
    }
}

pub trait ReqwestResponseExt: Sized {
    /// Turns non-success status codes into errors
    async fn check_status(self) -> Result<Self, ErrorContext>;
}

impl ReqwestResponseExt for Response {
    async fn check_status(self) -> Result<Self, ErrorContext> {
        let status = self.status();
        if !status.is_success() {
            bail!("API request failed with status code {status}");
        }
        Ok(self)
    }
}

pub async fn api_request<T, U>(url: U) -> Result<T, ErrorContext>
where
    T: for<'de> Deserialize<'de>,
    U: IntoUrl,
{
    REQWEST_CLIENT
        .get(url)
        .header("Accept", "application/json")
        .send().await.context("Failed to send the request")?
        .check_status().await?
        .json().await.context("Failed to deserialize response")
}
