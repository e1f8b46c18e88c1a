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

use cloneable_errors::{anyhow, ErrContext, ErrorContext};
use gloo_console::{error, log, warn};
use web_sys::Element;
use yew::platform::time::sleep;
use yew::prelude::*;

use crate::constants::{CONTROLS_MOUNT_INTERVAL, LIBRARY_POLL_INTERVAL, MAX_CONTROLS_MOUNT_ATTEMPTS, MAX_LIBRARY_POLLS};
use crate::controls::{apply_visibility, mount_toggle_button, ToggleButton};
use crate::loader::ensure_player_assets;
use crate::plyr::{library_loaded, PlayerConfig, PlayerHandle};
use crate::visibility::{HideStrategy, IconStyle};

#[derive(Properties, PartialEq)]
pub struct PlayerManagerProps {
    pub video_id: AttrValue,
    #[prop_or_default]
    pub hide_strategy: HideStrategy,
    #[prop_or_default]
    pub icon_style: IconStyle,
    /// Fired every time a player instance reports its `ready` event
    #[prop_or_default]
    pub on_ready: Callback<()>,
    /// Reports the progress bar visibility after every toggle
    #[prop_or_default]
    pub on_toggle: Callback<bool>,
}

enum Phase {
    /// The plyr assets haven't finished loading yet
    Unloaded,
    /// Assets are in, the player is being brought up: waiting for the `Plyr`
    /// global, the container node, or the player's `ready` event
    Polling { attempt: u32 },
    /// The player is up and running
    Ready,
    /// Terminal failure, shown in the UI with a retry control
    Failed(ErrorContext),
}

pub enum PlayerManagerMsg {
    AssetsLoaded(Result<(), ErrorContext>),
    Poll { generation: u64, attempt: u32 },
    PlayerReady { generation: u64 },
    MountControls { generation: u64, attempt: u32 },
    Toggle,
    Retry,
}

/// Owns the embedded player and the eye-toggle button mounted into its
/// control bar.
///
/// The player is torn down and rebuilt whenever `video_id` changes. Timer and
/// event messages are stamped with a generation counter, so leftovers from a
/// torn down player are discarded instead of poking the new one.
pub struct PlayerManager {
    phase: Phase,
    generation: u64,
    assets_loaded: bool,
    /// Set when a rebuild needs a fresh container div: the poll must wait
    /// until after the next render has placed it
    pending_poll: bool,
    player: Option<PlayerHandle>,
    toggle: Option<ToggleButton>,
    progress_shown: bool,
    /// Non-fatal: playback works, only the toggle button is missing
    mount_error: Option<ErrorContext>,
    container: NodeRef,
}

impl Component for PlayerManager {
    type Message = PlayerManagerMsg;
    type Properties = PlayerManagerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            phase: Phase::Unloaded,
            generation: 0,
            assets_loaded: false,
            pending_poll: false,
            player: None,
            toggle: None,
            progress_shown: true,
            mount_error: None,
            container: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PlayerManagerMsg::AssetsLoaded(result) => {
                if self.assets_loaded {
                    return false;
                }
                match result {
                    Ok(()) => {
                        self.assets_loaded = true;
                        self.phase = Phase::Polling { attempt: 0 };
                        self.pending_poll = true;
                        true
                    }
                    Err(err) => {
                        let err = err.context("Failed to load the player assets");
                        error!(format!("{err:?}"));
                        self.phase = Phase::Failed(err);
                        true
                    }
                }
            }
            PlayerManagerMsg::Poll { generation, attempt } => {
                if generation != self.generation {
                    return false;
                }
                let target = if library_loaded() {
                    self.container.cast::<Element>()
                } else {
                    None
                };
                let Some(target) = target else {
                    if attempt >= MAX_LIBRARY_POLLS {
                        let err = anyhow!("Gave up waiting for the Plyr library after {MAX_LIBRARY_POLLS} attempts");
                        error!(format!("{err:?}"));
                        self.phase = Phase::Failed(err);
                        return true;
                    }
                    log!("Plyr not available yet, waiting...");
                    self.phase = Phase::Polling { attempt };
                    ctx.link().send_future(async move {
                        sleep(LIBRARY_POLL_INTERVAL).await;
                        PlayerManagerMsg::Poll { generation, attempt: attempt + 1 }
                    });
                    return true;
                };
                let on_ready = ctx.link().callback(move |()| PlayerManagerMsg::PlayerReady { generation });
                match PlayerHandle::attach(&target, &PlayerConfig::default(), on_ready) {
                    Ok(player) => {
                        log!("Player instance constructed");
                        self.player = Some(player);
                        self.phase = Phase::Polling { attempt };
                        true
                    }
                    Err(err) => {
                        let err = err.context("Failed to construct the player");
                        error!(format!("{err:?}"));
                        self.phase = Phase::Failed(err);
                        true
                    }
                }
            }
            PlayerManagerMsg::PlayerReady { generation } => {
                if generation != self.generation {
                    warn!("Ignoring a ready event from a superseded player");
                    return false;
                }
                log!("Player ready");
                self.phase = Phase::Ready;
                ctx.props().on_ready.emit(());
                ctx.link().send_message(PlayerManagerMsg::MountControls { generation, attempt: 0 });
                true
            }
            PlayerManagerMsg::MountControls { generation, attempt } => {
                if generation != self.generation || self.toggle.is_some() {
                    return false;
                }
                let Some(player) = self.player.as_ref() else {
                    return false;
                };
                let Some(controls) = player.controls_root() else {
                    if attempt >= MAX_CONTROLS_MOUNT_ATTEMPTS {
                        let err = anyhow!("The control bar did not appear after {MAX_CONTROLS_MOUNT_ATTEMPTS} attempts");
                        error!(format!("{err:?}"));
                        self.mount_error = Some(err);
                        return true;
                    }
                    log!("Control bar not rendered yet, waiting...");
                    ctx.link().send_future(async move {
                        sleep(CONTROLS_MOUNT_INTERVAL).await;
                        PlayerManagerMsg::MountControls { generation, attempt: attempt + 1 }
                    });
                    return false;
                };
                let props = ctx.props();
                let on_toggle = ctx.link().callback(|()| PlayerManagerMsg::Toggle);
                match mount_toggle_button(&controls, self.progress_shown, props.icon_style, &on_toggle) {
                    Ok(button) => {
                        self.toggle = Some(button);
                        self.mount_error = None;
                    }
                    Err(err) => {
                        let err = err.context("Failed to mount the toggle button");
                        error!(format!("{err:?}"));
                        self.mount_error = Some(err);
                        return true;
                    }
                }
                if let Err(err) = apply_visibility(&controls, self.progress_shown, props.hide_strategy) {
                    warn!(format!("{:?}", err.context("Failed to apply the initial visibility state")));
                }
                true
            }
            PlayerManagerMsg::Toggle => {
                self.progress_shown = !self.progress_shown;
                let props = ctx.props();
                if let Some(toggle) = self.toggle.as_ref() {
                    toggle.set_state(self.progress_shown, props.icon_style);
                }
                if let Some(controls) = self.player.as_ref().and_then(PlayerHandle::controls_root) {
                    if let Err(err) = apply_visibility(&controls, self.progress_shown, props.hide_strategy) {
                        warn!(format!("{:?}", err.context("Failed to update the visibility state")));
                    }
                }
                props.on_toggle.emit(self.progress_shown);
                true
            }
            PlayerManagerMsg::Retry => {
                if !matches!(self.phase, Phase::Failed(..)) {
                    warn!("Ignoring a retry request outside of the failed state");
                    return false;
                }
                log!("Retrying player startup");
                self.restart(ctx);
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.video_id != old_props.video_id {
            log!(format!("Switching to video {}", props.video_id));
            self.restart(ctx);
            return true;
        }
        if props.icon_style != old_props.icon_style {
            if let Some(toggle) = self.toggle.as_ref() {
                toggle.set_state(self.progress_shown, props.icon_style);
            }
        }
        if props.hide_strategy != old_props.hide_strategy {
            if let Some(controls) = self.player.as_ref().and_then(PlayerHandle::controls_root) {
                if let Err(err) = apply_visibility(&controls, self.progress_shown, props.hide_strategy) {
                    warn!(format!("{:?}", err.context("Failed to re-apply the visibility state")));
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if let Phase::Failed(ref err) = self.phase {
            let retry = ctx.link().callback(|_| PlayerManagerMsg::Retry);
            return html! {
                <div class="player-error">
                    <h3>{"Failed to start the player"}</h3>
                    <pre>{format!("{err:?}")}</pre>
                    <button onclick={retry}>{"Retry"}</button>
                </div>
            };
        }
        let status = match self.phase {
            Phase::Unloaded => Some("Loading the player assets..."),
            Phase::Polling { .. } => Some("Starting the player..."),
            Phase::Ready | Phase::Failed(..) => None,
        };
        html! {
            <>
                <div class="player-frame" key={self.generation.to_string()}>
                    <div
                        ref={self.container.clone()}
                        data-plyr-provider="youtube"
                        data-plyr-embed-id={props.video_id.clone()}
                    ></div>
                </div>
                if let Some(status) = status {
                    <div class="player-status">{status}</div>
                }
                if let Some(ref err) = self.mount_error {
                    <div class="player-warning">{format!("The progress toggle is unavailable: {err}")}</div>
                }
            </>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_future(async {
                PlayerManagerMsg::AssetsLoaded(ensure_player_assets().await)
            });
            return;
        }
        if self.pending_poll {
            self.pending_poll = false;
            ctx.link().send_message(PlayerManagerMsg::Poll {
                generation: self.generation,
                attempt: 0,
            });
        }
    }
}

impl PlayerManager {
    /// Tears the current player down and starts over with a bumped
    /// generation. The old toggle button and player are dropped here, which
    /// detaches the button and destroys the underlying plyr instance.
    fn restart(&mut self, ctx: &Context<Self>) {
        self.generation += 1;
        self.toggle = None;
        self.player = None;
        self.mount_error = None;
        if self.assets_loaded {
            self.phase = Phase::Polling { attempt: 0 };
            self.pending_poll = true;
        } else {
            self.phase = Phase::Unloaded;
            ctx.link().send_future(async {
                PlayerManagerMsg::AssetsLoaded(ensure_player_assets().await)
            });
        }
    }
}
