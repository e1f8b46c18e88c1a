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

use cloneable_errors::{anyhow, ErrorContext, ResContext};
use enumflags2::{bitflags, BitFlags};
use gloo_console::{log, warn};
use serde::Serialize;
use strum::IntoStaticStr;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};
use web_sys::Element;
use yew::Callback;

use crate::utils::JsError;

#[wasm_bindgen]
extern "C" {
    /// The global `Plyr` class installed by the CDN script
    pub type Plyr;

    #[wasm_bindgen(constructor, catch)]
    fn new(target: &Element, options: &JsValue) -> Result<Plyr, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn destroy(this: &Plyr) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    fn on(this: &Plyr, event: &str, handler: &Function);
}

/// Whether the CDN script has installed the `Plyr` global yet
pub fn library_loaded() -> bool {
    web_sys::window().is_some_and(|window| {
        Reflect::get(window.as_ref(), &JsValue::from_str("Plyr"))
            .is_ok_and(|value| value.is_function())
    })
}

/// The controls plyr should render, in plyr's own layout order.
#[bitflags]
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Control {
    PlayLarge = 1 << 0,
    Play = 1 << 1,
    Mute = 1 << 2,
    Volume = 1 << 3,
    CurrentTime = 1 << 4,
    Progress = 1 << 5,
    Captions = 1 << 6,
    Settings = 1 << 7,
    Pip = 1 << 8,
    Airplay = 1 << 9,
    Fullscreen = 1 << 10,
}

pub const DEFAULT_CONTROLS: BitFlags<Control> = BitFlags::ALL;

/// Renders a set of controls as the names plyr expects, in declaration order
pub fn control_names(controls: BitFlags<Control>) -> Vec<&'static str> {
    controls.iter().map(<&str>::from).collect()
}

/// Options passed to the `Plyr` constructor.
///
/// Field names follow plyr's option schema, hence the camelCase renames.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerConfig {
    pub controls: Vec<&'static str>,
    pub youtube: YoutubeOptions,
}

impl PlayerConfig {
    pub fn new(controls: BitFlags<Control>) -> Self {
        Self {
            controls: control_names(controls),
            youtube: YoutubeOptions::default(),
        }
    }

    fn to_js(&self) -> Result<JsValue, ErrorContext> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|err| anyhow!("Failed to serialize the player options: {err}"))
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CONTROLS)
    }
}

/// Provider options for embedded youtube videos
#[derive(Debug, Clone, Serialize)]
pub struct YoutubeOptions {
    #[serde(rename = "noCookie")]
    pub no_cookie: bool,
    pub rel: u8,
    pub showinfo: u8,
    pub iv_load_policy: u8,
    pub modestbranding: u8,
}

impl Default for YoutubeOptions {
    fn default() -> Self {
        Self {
            no_cookie: true,
            rel: 0,
            showinfo: 0,
            iv_load_policy: 3,
            modestbranding: 1,
        }
    }
}

/// An owned `Plyr` instance.
///
/// Dropping this destroys the underlying JS player, which also tears down the
/// generated control bar.
pub struct PlayerHandle {
    player: Plyr,
    _ready: Closure<dyn FnMut()>,
}

impl PlayerHandle {
    /// Constructs a player on `target` and subscribes `on_ready` to the
    /// player's `ready` event.
    pub fn attach(target: &Element, config: &PlayerConfig, on_ready: Callback<()>) -> Result<Self, ErrorContext> {
        let options = config.to_js()?;
        let player = Plyr::new(target, &options)
            .map_err(JsError::from)
            .context("The Plyr constructor threw")?;
        let ready = Closure::<dyn FnMut()>::new(move || on_ready.emit(()));
        player.on("ready", ready.as_ref().unchecked_ref());
        Ok(Self {
            player,
            _ready: ready,
        })
    }

    /// The root element of the generated control bar.
    ///
    /// `None` until plyr has rendered its controls, which happens at some
    /// point after construction.
    pub fn controls_root(&self) -> Option<Element> {
        let elements = Reflect::get(self.player.as_ref(), &JsValue::from_str("elements")).ok()?;
        let controls = Reflect::get(&elements, &JsValue::from_str("controls")).ok()?;
        controls.dyn_into().ok()
    }
}

impl Drop for PlayerHandle {
    fn drop(&mut self) {
        log!("Destroying the player instance");
        if let Err(err) = self.player.destroy() {
            warn!("Failed to destroy the player instance", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn default_config_matches_plyr_option_schema() {
        let value = serde_json::to_value(PlayerConfig::default()).expect("config should serialize");
        assert_eq!(value, json!({
            "controls": [
                "play-large", "play", "mute", "volume", "current-time",
                "progress", "captions", "settings", "pip", "airplay", "fullscreen",
            ],
            "youtube": {
                "noCookie": true,
                "rel": 0,
                "showinfo": 0,
                "iv_load_policy": 3,
                "modestbranding": 1,
            },
        }));
    }

    #[test]
    fn control_names_follow_declaration_order() {
        let names = control_names(Control::Fullscreen | Control::Play | Control::CurrentTime);
        assert_eq!(names, ["play", "current-time", "fullscreen"]);
    }

    #[test]
    fn default_controls_include_the_toggle_neighbours() {
        assert!(DEFAULT_CONTROLS.contains(Control::Progress));
        assert!(DEFAULT_CONTROLS.contains(Control::CurrentTime));
        assert!(DEFAULT_CONTROLS.contains(Control::Fullscreen));
        assert_eq!(DEFAULT_CONTROLS.iter().count(), 11);
    }
}
