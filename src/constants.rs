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

use std::sync::LazyLock;
use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use regex::Regex;
use reqwest::{Client, Url};

use crate::built_info;

/// The video loaded before the user submits anything.
pub const DEFAULT_VIDEO_ID: &str = "dQw4w9WgXcQ";

pub const PLYR_SCRIPT_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/plyr/3.7.8/plyr.polyfilled.js";
pub const PLYR_STYLESHEET_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/plyr/3.7.8/plyr.css";

pub const SCRIPT_LOAD_TIMEOUT: Duration = Duration::from_secs(30);
pub const LIBRARY_POLL_INTERVAL: Duration = Duration::from_millis(100);
pub const MAX_LIBRARY_POLLS: u32 = 50; // 5s total
pub const CONTROLS_MOUNT_INTERVAL: Duration = Duration::from_millis(300);
pub const MAX_CONTROLS_MOUNT_ATTEMPTS: u32 = 20; // 6s total

/// localStorage key the persisted [`Settings`](crate::settings::Settings) live under.
pub const SETTINGS_KEY: &str = "veilplayer-settings";

pub static REQWEST_CLIENT: LazyLock<Client> = LazyLock::new(Client::new);

pub static YOUTU_BE_URL: LazyLock<Url> = LazyLock::new(|| Url::parse("https://youtu.be/").expect("YOUTU_BE_URL should be a valid URL"));
pub static YOUTUBE_OEMBED_URL: LazyLock<Url> = LazyLock::new(|| Url::parse("https://www.youtube-nocookie.com/oembed").expect("YOUTUBE_OEMBED_URL should be a valid URL"));

pub static VIDEO_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\w\d_-]{11}$").expect("VIDEO_ID_REGEX should be a valid regex"));

pub static VERSION_STRING: LazyLock<&'static str> = LazyLock::new(create_version_string);
pub static COMMIT_LINK: LazyLock<&'static str> = LazyLock::new(|| match built_info::GIT_COMMIT_HASH {
    Some(hash) => format!("{}/commit/{hash}", built_info::PKG_REPOSITORY).leak(),
    None => built_info::PKG_REPOSITORY,
});
pub static BUILD_TIME: LazyLock<Option<DateTime<FixedOffset>>> = LazyLock::new(|| DateTime::parse_from_rfc2822(built_info::BUILT_TIME_UTC).ok());

fn create_version_string() -> &'static str {
    match (built_info::GIT_COMMIT_HASH_SHORT, built_info::GIT_DIRTY) {
        (Some(hash), Some(true)) => format!("{}+g{hash}-dirty", built_info::PKG_VERSION).leak(),
        (Some(hash), _) => format!("{}+g{hash}", built_info::PKG_VERSION).leak(),
        _ => built_info::PKG_VERSION,
    }
}
