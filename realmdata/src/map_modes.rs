//! Map display modes.

use serde::Serialize;

keyed_enum! {
    pub enum MapMode {
        Political => "political",
        Terrain => "terrain",
        Trade => "trade",
        Religion => "religion",
        Culture => "culture",
        Diplomatic => "diplomatic",
        Development => "development",
        Autonomy => "autonomy",
        Unrest => "unrest",
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MapModeDef {
    pub mode: MapMode,
    pub label: &'static str,
    pub hotkey: char,
}

pub static MAP_MODES: &[MapModeDef] = &[
    MapModeDef { mode: MapMode::Political, label: "Political", hotkey: 'q' },
    MapModeDef { mode: MapMode::Terrain, label: "Terrain", hotkey: 'w' },
    MapModeDef { mode: MapMode::Trade, label: "Trade", hotkey: 'e' },
    MapModeDef { mode: MapMode::Religion, label: "Religion", hotkey: 'r' },
    MapModeDef { mode: MapMode::Culture, label: "Culture", hotkey: 't' },
    MapModeDef { mode: MapMode::Diplomatic, label: "Diplomatic", hotkey: 'y' },
    MapModeDef { mode: MapMode::Development, label: "Development", hotkey: 'u' },
    MapModeDef { mode: MapMode::Autonomy, label: "Autonomy", hotkey: 'i' },
    MapModeDef { mode: MapMode::Unrest, label: "Unrest", hotkey: 'o' },
];

/// Mode bound to `key`, case-insensitive.
pub fn map_mode_for_hotkey(key: char) -> Option<MapMode> {
    let key = key.to_ascii_lowercase();
    MAP_MODES.iter().find(|m| m.hotkey == key).map(|m| m.mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotkeys_are_unique() {
        for m in MAP_MODES {
            assert_eq!(MAP_MODES.iter().filter(|o| o.hotkey == m.hotkey).count(), 1);
        }
        assert_eq!(map_mode_for_hotkey('Q'), Some(MapMode::Political));
        assert_eq!(map_mode_for_hotkey('z'), None);
    }
}
