//! `localStorage` persistence: the age-verification flag and the local
//! play-history record. Every access tolerates blocked or unavailable
//! storage by degrading to the unset/default value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ui_model::{Consent, GameKind};

const AGE_VERIFIED_KEY: &str = "ageVerified";
const PLAY_HISTORY_KEY: &str = "cyberslots.playHistory";
const PLAY_HISTORY_VERSION: u32 = 1;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn local_storage_get_string(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub fn local_storage_set_string(key: &str, value: &str) {
    if let Some(s) = local_storage() {
        let _ = s.set_item(key, value);
    }
}

/// Read the persisted consent flag. Blocked storage reads as never
/// verified, so the gate simply shows again on the next visit.
pub fn load_consent() -> Consent {
    Consent::from_stored(local_storage_get_string(AGE_VERIFIED_KEY).as_deref())
}

/// Persist the flag. Only ever writes the granted value; the application
/// never clears the key.
pub fn store_consent(consent: Consent) {
    if let Some(value) = consent.stored_value() {
        local_storage_set_string(AGE_VERIFIED_KEY, value);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayRecord {
    pub game: String,
    pub plays: u32,
    pub last_played: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayHistory {
    pub version: u32,
    pub records: Vec<PlayRecord>,
}

impl Default for PlayHistory {
    fn default() -> Self {
        Self {
            version: PLAY_HISTORY_VERSION,
            records: Vec::new(),
        }
    }
}

pub fn load_play_history() -> PlayHistory {
    local_storage_get_string(PLAY_HISTORY_KEY)
        .and_then(|raw| serde_json::from_str::<PlayHistory>(&raw).ok())
        .filter(|h| h.version == PLAY_HISTORY_VERSION)
        .unwrap_or_default()
}

/// Bump the play counter for a game. Persistence failures are ignored; the
/// history is a local convenience, not a correctness concern.
pub fn record_game_play(game: GameKind) {
    let mut history = load_play_history();
    let now = Utc::now();
    match history.records.iter_mut().find(|r| r.game == game.title()) {
        Some(record) => {
            record.plays += 1;
            record.last_played = now;
        }
        None => history.records.push(PlayRecord {
            game: game.title().to_string(),
            plays: 1,
            last_played: now,
        }),
    }
    if let Ok(raw) = serde_json::to_string(&history) {
        local_storage_set_string(PLAY_HISTORY_KEY, &raw);
    }
}
