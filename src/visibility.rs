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
use strum::{Display, EnumIter, EnumString};

/// How the progress bar disappears when the user hides it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum HideStrategy {
    /// The bar keeps its space, so the other controls don't shift around
    #[default]
    PreserveLayout,
    /// The bar is removed from the layout and the other controls spread out
    Collapse,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum IconStyle {
    #[default]
    Outline,
    Filled,
}

const EYE_OPEN_OUTLINE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24"><path fill="currentColor" d="M12 9a3 3 0 0 1 3 3a3 3 0 0 1-3 3a3 3 0 0 1-3-3a3 3 0 0 1 3-3m0-4.5c5 0 9.27 3.11 11 7.5c-1.73 4.39-6 7.5-11 7.5S2.73 16.39 1 12c1.73-4.39 6-7.5 11-7.5M3.18 12a9.821 9.821 0 0 0 17.64 0a9.821 9.821 0 0 0-17.64 0Z"/></svg>"#;
const EYE_CLOSED_OUTLINE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24"><path fill="currentColor" d="M2 5.27L3.28 4L20 20.72L18.73 22l-3.08-3.08c-1.15.38-2.37.58-3.65.58c-5 0-9.27-3.11-11-7.5c.69-1.76 1.79-3.31 3.19-4.54L2 5.27M12 9a3 3 0 0 1 3 3a3 3 0 0 1-.17 1L11 9.17A3 3 0 0 1 12 9m0-4.5c5 0 9.27 3.11 11 7.5a11.79 11.79 0 0 1-4 5.19l-1.42-1.43A9.862 9.862 0 0 0 20.82 12A9.821 9.821 0 0 0 12 6.5c-1.09 0-2.16.18-3.16.5L7.3 5.47c1.44-.62 3.03-.97 4.7-.97M3.18 12A9.821 9.821 0 0 0 12 17.5c.69 0 1.37-.07 2.03-.2L10.6 14c-.6-.5-1.08-1.2-1.43-1.96L7.42 10.8c-1.78 1.1-3.33 2.78-4.24 4.7Z"/></svg>"#;
const EYE_OPEN_FILLED: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24"><path fill="currentColor" d="M12 9a3 3 0 0 0-3 3a3 3 0 0 0 3 3a3 3 0 0 0 3-3a3 3 0 0 0-3-3m0 8a5 5 0 0 1-5-5a5 5 0 0 1 5-5a5 5 0 0 1 5 5a5 5 0 0 1-5 5m0-12.5C7 4.5 2.73 7.61 1 12c1.73 4.39 6 7.5 11 7.5s9.27-3.11 11-7.5c-1.73-4.39-6-7.5-11-7.5Z"/></svg>"#;
const EYE_CLOSED_FILLED: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24"><path fill="currentColor" d="M11.83 9L15 12.16V12a3 3 0 0 0-3-3h-.17m-4.3.8l1.55 1.55c-.05.21-.08.42-.08.65a3 3 0 0 0 3 3c.22 0 .44-.03.65-.08l1.55 1.55c-.67.33-1.41.53-2.2.53a5 5 0 0 1-5-5c0-.79.2-1.53.53-2.2M2 4.27l2.28 2.28l.45.45C3.08 8.3 1.78 10 1 12c1.73 4.39 6 7.5 11 7.5c1.55 0 3.03-.3 4.38-.84l.43.42L19.73 22L21 20.73L3.27 3M12 7a5 5 0 0 1 5 5c0 .64-.13 1.26-.36 1.82l2.93 2.93c1.5-1.25 2.7-2.89 3.43-4.75c-1.73-4.39-6-7.5-11-7.5c-1.4 0-2.74.25-3.98.7l2.16 2.15C10.74 7.13 11.35 7 12 7Z"/></svg>"#;

/// The svg markup for the toggle button in the given state
pub fn toggle_icon(style: IconStyle, shown: bool) -> &'static str {
    match (style, shown) {
        (IconStyle::Outline, true) => EYE_OPEN_OUTLINE,
        (IconStyle::Outline, false) => EYE_CLOSED_OUTLINE,
        (IconStyle::Filled, true) => EYE_OPEN_FILLED,
        (IconStyle::Filled, false) => EYE_CLOSED_FILLED,
    }
}

/// The accessible label for the toggle button in the given state
pub fn toggle_label(shown: bool) -> &'static str {
    if shown {
        "Hide progress"
    } else {
        "Show progress"
    }
}

/// A single inline style assignment. `None` clears the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRule {
    pub property: &'static str,
    pub value: Option<&'static str>,
}

/// Every inline style property the toggle ever touches.
///
/// Both rule sets cover all of these in every state, so switching strategies
/// mid-session can't leave stale values behind.
pub const MANAGED_PROPERTIES: [&str; 5] = ["display", "visibility", "opacity", "pointer-events", "min-width"];

/// Inline styles for the progress container in the given state
pub fn progress_rules(shown: bool, strategy: HideStrategy) -> [StyleRule; 5] {
    match (strategy, shown) {
        (HideStrategy::PreserveLayout, true) => [
            StyleRule { property: "display", value: None },
            StyleRule { property: "visibility", value: Some("visible") },
            StyleRule { property: "opacity", value: Some("1") },
            StyleRule { property: "pointer-events", value: Some("auto") },
            StyleRule { property: "min-width", value: None },
        ],
        (HideStrategy::PreserveLayout, false) => [
            StyleRule { property: "display", value: None },
            StyleRule { property: "visibility", value: Some("hidden") },
            StyleRule { property: "opacity", value: Some("0") },
            StyleRule { property: "pointer-events", value: Some("none") },
            // keeps flexbox from collapsing the reserved space entirely
            StyleRule { property: "min-width", value: Some("1px") },
        ],
        (HideStrategy::Collapse, true) => [
            StyleRule { property: "display", value: None },
            StyleRule { property: "visibility", value: None },
            StyleRule { property: "opacity", value: None },
            StyleRule { property: "pointer-events", value: None },
            StyleRule { property: "min-width", value: None },
        ],
        (HideStrategy::Collapse, false) => [
            StyleRule { property: "display", value: Some("none") },
            StyleRule { property: "visibility", value: None },
            StyleRule { property: "opacity", value: None },
            StyleRule { property: "pointer-events", value: None },
            StyleRule { property: "min-width", value: None },
        ],
    }
}

/// Inline styles for the current-time display in the given state
pub fn time_rules(shown: bool, strategy: HideStrategy) -> [StyleRule; 5] {
    match (strategy, shown) {
        (HideStrategy::PreserveLayout, true) => [
            StyleRule { property: "display", value: None },
            StyleRule { property: "visibility", value: Some("visible") },
            StyleRule { property: "opacity", value: Some("1") },
            StyleRule { property: "pointer-events", value: None },
            StyleRule { property: "min-width", value: None },
        ],
        (HideStrategy::PreserveLayout, false) => [
            StyleRule { property: "display", value: None },
            StyleRule { property: "visibility", value: Some("hidden") },
            StyleRule { property: "opacity", value: Some("0") },
            StyleRule { property: "pointer-events", value: None },
            StyleRule { property: "min-width", value: None },
        ],
        (HideStrategy::Collapse, true) => [
            StyleRule { property: "display", value: None },
            StyleRule { property: "visibility", value: None },
            StyleRule { property: "opacity", value: None },
            StyleRule { property: "pointer-events", value: None },
            StyleRule { property: "min-width", value: None },
        ],
        (HideStrategy::Collapse, false) => [
            StyleRule { property: "display", value: Some("none") },
            StyleRule { property: "visibility", value: None },
            StyleRule { property: "opacity", value: None },
            StyleRule { property: "pointer-events", value: None },
            StyleRule { property: "min-width", value: None },
        ],
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    fn assert_full_coverage(rules: &[StyleRule; 5]) {
        let mut properties: Vec<&str> = rules.iter().map(|rule| rule.property).collect();
        properties.sort_unstable();
        let mut expected = MANAGED_PROPERTIES.to_vec();
        expected.sort_unstable();
        assert_eq!(properties, expected);
    }

    #[test]
    fn rule_sets_cover_every_managed_property() {
        for strategy in HideStrategy::iter() {
            for shown in [true, false] {
                assert_full_coverage(&progress_rules(shown, strategy));
                assert_full_coverage(&time_rules(shown, strategy));
            }
        }
    }

    fn value_of(rules: &[StyleRule; 5], property: &str) -> Option<&'static str> {
        rules.iter().find(|rule| rule.property == property).expect("property should be covered").value
    }

    #[test]
    fn preserve_layout_hides_without_collapsing() {
        let rules = progress_rules(false, HideStrategy::PreserveLayout);
        assert_eq!(value_of(&rules, "visibility"), Some("hidden"));
        assert_eq!(value_of(&rules, "opacity"), Some("0"));
        assert_eq!(value_of(&rules, "pointer-events"), Some("none"));
        assert_eq!(value_of(&rules, "min-width"), Some("1px"));
        assert_eq!(value_of(&rules, "display"), None);
    }

    #[test]
    fn collapse_hides_via_display() {
        let rules = progress_rules(false, HideStrategy::Collapse);
        assert_eq!(value_of(&rules, "display"), Some("none"));
        assert_eq!(value_of(&rules, "visibility"), None);
    }

    #[test]
    fn shown_rules_never_hide_anything() {
        for strategy in HideStrategy::iter() {
            for rules in [progress_rules(true, strategy), time_rules(true, strategy)] {
                for rule in &rules {
                    assert_ne!(rule.value, Some("none"));
                    assert_ne!(rule.value, Some("hidden"));
                    assert_ne!(rule.value, Some("0"));
                }
            }
        }
    }

    #[test]
    fn time_display_stays_clickthrough() {
        // the time display never takes pointer events, plyr handles it
        for strategy in HideStrategy::iter() {
            for shown in [true, false] {
                assert_eq!(value_of(&time_rules(shown, strategy), "pointer-events"), None);
            }
        }
    }

    #[test]
    fn labels_flip_with_state() {
        assert_eq!(toggle_label(true), "Hide progress");
        assert_eq!(toggle_label(false), "Show progress");
    }

    #[test]
    fn icons_differ_per_state_and_style() {
        for style in IconStyle::iter() {
            assert_ne!(toggle_icon(style, true), toggle_icon(style, false));
        }
        for shown in [true, false] {
            assert_ne!(toggle_icon(IconStyle::Outline, shown), toggle_icon(IconStyle::Filled, shown));
        }
    }

    #[test]
    fn strategy_names_are_kebab_case() {
        assert_eq!(serde_json::to_string(&HideStrategy::PreserveLayout).expect("strategy should serialize"), "\"preserve-layout\"");
        assert_eq!(HideStrategy::Collapse.to_string(), "collapse");
        assert_eq!(HideStrategy::from_str("preserve-layout").expect("name should parse"), HideStrategy::PreserveLayout);
    }

    #[test]
    fn icon_style_round_trips() {
        for style in IconStyle::iter() {
            assert_eq!(IconStyle::from_str(&style.to_string()).expect("name should parse"), style);
            let json = serde_json::to_string(&style).expect("style should serialize");
            assert_eq!(serde_json::from_str::<IconStyle>(&json).expect("style should deserialize"), style);
        }
    }
}
