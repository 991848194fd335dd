//! Save-game metadata: checksums, naming and autosave rotation.
//!
//! Only the metadata record lives here. The checksum covers every field
//! except itself, hashed over the compact JSON form.

use crate::state::{GameDate, Tag};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Hex characters kept from the digest.
const CHECKSUM_LEN: usize = 16;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Failed to encode or decode save metadata: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Checksum mismatch for save {id}: expected {expected}, found {found}")]
    ChecksumMismatch {
        id: String,
        expected: String,
        found: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveGame {
    pub id: String,
    pub name: String,
    pub nation: Tag,
    pub date: GameDate,
    /// Unix seconds.
    pub created_at: u64,
    pub play_time_seconds: u64,
    pub version: String,
    #[serde(default)]
    pub autosave: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

impl SaveGame {
    /// Copy with the checksum filled in.
    pub fn seal(mut self) -> Result<Self, SaveError> {
        self.checksum = Some(calculate_checksum(&self)?);
        Ok(self)
    }
}

pub fn calculate_checksum(save: &SaveGame) -> Result<String, SaveError> {
    let unsealed = SaveGame {
        checksum: None,
        ..save.clone()
    };
    let bytes = serde_json::to_vec(&unsealed)?;
    let digest = Sha256::digest(&bytes);
    let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    Ok(hex[..CHECKSUM_LEN].to_string())
}

/// False for unsealed saves.
pub fn verify_checksum(save: &SaveGame) -> bool {
    match (&save.checksum, calculate_checksum(save)) {
        (Some(stored), Ok(actual)) => *stored == actual,
        _ => false,
    }
}

pub fn to_json(save: &SaveGame) -> Result<String, SaveError> {
    Ok(serde_json::to_string_pretty(save)?)
}

/// Parse save metadata. A present checksum must match.
pub fn from_json(json: &str) -> Result<SaveGame, SaveError> {
    let save: SaveGame = serde_json::from_str(json)?;
    if let Some(stored) = &save.checksum {
        let actual = calculate_checksum(&save)?;
        if *stored != actual {
            return Err(SaveError::ChecksumMismatch {
                id: save.id.clone(),
                expected: actual,
                found: stored.clone(),
            });
        }
    }
    Ok(save)
}

/// `2h 05m`, `12m` or `45s`.
pub fn format_play_time(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes:02}m")
    } else if minutes > 0 {
        format!("{minutes}m")
    } else {
        format!("{seconds}s")
    }
}

pub fn generate_save_name(nation: &str, date: GameDate, autosave: bool) -> String {
    if autosave {
        format!("Autosave - {nation} {date}")
    } else {
        format!("{nation} {date}")
    }
}

/// Newest first; equal timestamps fall back to name.
pub fn sort_saves_by_date(saves: &mut [SaveGame]) {
    saves.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.name.cmp(&b.name)));
}

/// Keep every manual save and the newest `keep` autosaves.
pub fn prune_autosaves(saves: Vec<SaveGame>, keep: usize) -> Vec<SaveGame> {
    if saves.iter().filter(|s| s.autosave).count() <= keep {
        return saves;
    }

    let mut kept = 0;
    let mut result = Vec::with_capacity(saves.len());
    let mut by_age = saves;
    sort_saves_by_date(&mut by_age);
    for save in by_age {
        if !save.autosave {
            result.push(save);
        } else if kept < keep {
            kept += 1;
            result.push(save);
        } else {
            log::debug!("dropping autosave {}", save.name);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn save(id: &str, created_at: u64, autosave: bool) -> SaveGame {
        SaveGame {
            id: id.to_string(),
            name: format!("save {id}"),
            nation: "FRA".to_string(),
            date: GameDate::new(1444, 11, 11),
            created_at,
            play_time_seconds: 0,
            version: "1.0.0".to_string(),
            autosave,
            checksum: None,
        }
    }

    #[test]
    fn test_checksum_is_sixteen_hex_chars() {
        let sum = calculate_checksum(&save("a", 1, false)).unwrap();
        assert_eq!(sum.len(), 16);
        assert!(sum.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_checksum_ignores_itself() {
        let plain = save("a", 1, false);
        let sealed = plain.clone().seal().unwrap();
        assert_eq!(calculate_checksum(&plain).unwrap(), calculate_checksum(&sealed).unwrap());
        assert!(verify_checksum(&sealed));
        assert!(!verify_checksum(&plain));
    }

    #[test]
    fn test_checksum_detects_edits() {
        let mut sealed = save("a", 1, false).seal().unwrap();
        sealed.play_time_seconds = 99;
        assert!(!verify_checksum(&sealed));
    }

    #[test]
    fn test_json_round_trip_verifies() {
        let sealed = save("a", 1, true).seal().unwrap();
        let json = to_json(&sealed).unwrap();
        assert_eq!(from_json(&json).unwrap(), sealed);

        let tampered = json.replace("\"FRA\"", "\"ENG\"");
        assert!(matches!(from_json(&tampered), Err(SaveError::ChecksumMismatch { .. })));
        assert!(matches!(from_json("{"), Err(SaveError::Json(_))));
    }

    #[test]
    fn test_format_play_time() {
        assert_eq!(format_play_time(45), "45s");
        assert_eq!(format_play_time(720), "12m");
        assert_eq!(format_play_time(7500), "2h 05m");
    }

    #[test]
    fn test_generate_save_name() {
        let date = GameDate::new(1500, 3, 2);
        assert_eq!(generate_save_name("FRA", date, false), "FRA 1500.3.2");
        assert_eq!(generate_save_name("FRA", date, true), "Autosave - FRA 1500.3.2");
    }

    #[test]
    fn test_sort_newest_first() {
        let mut saves = vec![save("a", 1, false), save("b", 3, false), save("c", 2, false)];
        sort_saves_by_date(&mut saves);
        let ids: Vec<&str> = saves.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_prune_autosaves_keeps_manual() {
        let saves = vec![
            save("m1", 1, false),
            save("a1", 2, true),
            save("a2", 3, true),
            save("a3", 4, true),
        ];
        let pruned = prune_autosaves(saves, 2);
        let ids: Vec<&str> = pruned.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a3", "a2", "m1"]);
    }
}
