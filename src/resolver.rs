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

use std::str::FromStr;

use reqwest::Url;

use crate::constants::VIDEO_ID_REGEX;

const WATCH_URL_MARKER: &str = "youtube.com/watch?v=";
const SHORT_URL_MARKER: &str = "youtu.be/";

pub type UrlParseError = <Url as FromStr>::Err;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoIdSource {
    /// Extracted from the `v` query parameter of a watch URL
    WatchParam,
    /// Extracted from the path of a youtu.be share link
    ShortPath,
    /// Input passed through unchanged
    Verbatim,
}

/// Result of turning user input into a video id.
///
/// Resolution never fails outright: inputs that don't parse fall back to the
/// trimmed input, with the parse error kept around for the caller to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVideoId {
    pub id: String,
    pub source: VideoIdSource,
    pub error: Option<UrlParseError>,
}

impl ResolvedVideoId {
    fn verbatim(input: &str, error: Option<UrlParseError>) -> Self {
        Self {
            id: input.to_owned(),
            source: VideoIdSource::Verbatim,
            error,
        }
    }

    /// True if nothing usable was extracted
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    /// Whether the id looks like a standard 11 character video id
    pub fn looks_canonical(&self) -> bool {
        VIDEO_ID_REGEX.is_match(&self.id)
    }
}

/// Extracts a video id from free-form user input.
///
/// Accepts full watch URLs, youtu.be share links, and bare video ids.
/// The id is not validated, youtube is the authority on what exists.
pub fn resolve_video_id(input: &str) -> ResolvedVideoId {
    let input = input.trim();
    if input.contains(WATCH_URL_MARKER) {
        return match Url::parse(input) {
            Ok(url) => match url.query_pairs().find(|(key, _)| key == "v") {
                Some((_, value)) => ResolvedVideoId {
                    id: value.into_owned(),
                    source: VideoIdSource::WatchParam,
                    error: None,
                },
                None => ResolvedVideoId::verbatim(input, None),
            },
            Err(error) => ResolvedVideoId::verbatim(input, Some(error)),
        };
    }
    if let Some(index) = input.find(SHORT_URL_MARKER) {
        let rest = &input[index + SHORT_URL_MARKER.len()..];
        let id = rest.find(['?', '#']).map_or(rest, |cut| &rest[..cut]);
        return ResolvedVideoId {
            id: id.to_owned(),
            source: VideoIdSource::ShortPath,
            error: None,
        };
    }
    ResolvedVideoId::verbatim(input, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_url_param_is_extracted() {
        let resolved = resolve_video_id("https://youtube.com/watch?v=abc123");
        assert_eq!(resolved.id, "abc123");
        assert_eq!(resolved.source, VideoIdSource::WatchParam);
        assert!(resolved.error.is_none());
    }

    #[test]
    fn watch_url_extra_params_are_ignored() {
        let resolved = resolve_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s&list=PL0");
        assert_eq!(resolved.id, "dQw4w9WgXcQ");
        assert_eq!(resolved.source, VideoIdSource::WatchParam);
    }

    #[test]
    fn short_url_path_is_extracted() {
        let resolved = resolve_video_id("https://youtu.be/xyz987");
        assert_eq!(resolved.id, "xyz987");
        assert_eq!(resolved.source, VideoIdSource::ShortPath);
        assert!(resolved.error.is_none());
    }

    #[test]
    fn short_url_tracking_query_is_cut() {
        let resolved = resolve_video_id("https://youtu.be/xyz987?si=AAAAAAAAAAAAAAAA");
        assert_eq!(resolved.id, "xyz987");
    }

    #[test]
    fn short_url_fragment_is_cut() {
        assert_eq!(resolve_video_id("https://youtu.be/xyz987#t=1m").id, "xyz987");
        assert_eq!(resolve_video_id("https://youtu.be/xyz987?si=0#t=1m").id, "xyz987");
    }

    #[test]
    fn bare_id_passes_through() {
        let resolved = resolve_video_id("plainID");
        assert_eq!(resolved.id, "plainID");
        assert_eq!(resolved.source, VideoIdSource::Verbatim);
        assert!(resolved.error.is_none());
    }

    #[test]
    fn schemeless_watch_url_falls_back_to_raw_input() {
        let resolved = resolve_video_id("youtube.com/watch?v=abc123");
        assert_eq!(resolved.id, "youtube.com/watch?v=abc123");
        assert_eq!(resolved.source, VideoIdSource::Verbatim);
        assert!(resolved.error.is_some());
    }

    #[test]
    fn watch_url_inside_a_fragment_is_not_a_watch_url() {
        let resolved = resolve_video_id("https://example.com/#youtube.com/watch?v=abc123");
        assert_eq!(resolved.source, VideoIdSource::Verbatim);
        assert!(resolved.error.is_none());
    }

    #[test]
    fn empty_v_value_resolves_to_an_empty_id() {
        let resolved = resolve_video_id("https://www.youtube.com/watch?v=");
        assert!(resolved.is_empty());
        assert_eq!(resolved.source, VideoIdSource::WatchParam);
    }

    #[test]
    fn input_is_trimmed() {
        assert_eq!(resolve_video_id("  dQw4w9WgXcQ\n").id, "dQw4w9WgXcQ");
        assert_eq!(resolve_video_id(" https://youtu.be/xyz987 ").id, "xyz987");
    }

    #[test]
    fn empty_input_resolves_to_an_empty_id() {
        assert!(resolve_video_id("").is_empty());
        assert!(resolve_video_id("   ").is_empty());
    }

    #[test]
    fn canonical_id_check() {
        assert!(resolve_video_id("dQw4w9WgXcQ").looks_canonical());
        assert!(resolve_video_id("abc-DEF_123").looks_canonical());
        assert!(!resolve_video_id("plainID").looks_canonical());
        assert!(!resolve_video_id("twelve chars").looks_canonical());
    }
}
