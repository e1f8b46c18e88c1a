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

use serde::{Deserialize, Serialize};

use crate::visibility::{HideStrategy, IconStyle};

/// Persisted behaviour settings.
///
/// Stored as json in localStorage. Missing fields fall back to their
/// defaults, so stored settings survive schema additions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub hide_strategy: HideStrategy,
    pub icon_style: IconStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip() {
        let settings = Settings {
            hide_strategy: HideStrategy::Collapse,
            icon_style: IconStyle::Filled,
        };
        let json = serde_json::to_string(&settings).expect("settings should serialize");
        assert_eq!(serde_json::from_str::<Settings>(&json).expect("settings should deserialize"), settings);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").expect("an empty object should deserialize");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn partial_settings_keep_the_rest_default() {
        let settings: Settings = serde_json::from_str(r#"{"hide_strategy":"collapse"}"#)
            .expect("partial settings should deserialize");
        assert_eq!(settings.hide_strategy, HideStrategy::Collapse);
        assert_eq!(settings.icon_style, IconStyle::default());
    }

    #[test]
    fn defaults_preserve_layout_with_outline_icons() {
        let settings = Settings::default();
        assert_eq!(settings.hide_strategy, HideStrategy::PreserveLayout);
        assert_eq!(settings.icon_style, IconStyle::Outline);
    }
}
