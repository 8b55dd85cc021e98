//! Best-effort local snapshot of the flask in `localStorage`.

use log::{info, warn};

use crate::config::FLASK_STORAGE_KEY;
use crate::error::StorageError;
use crate::model::FlaskSlime;

pub fn encode_snapshot(slimes: &[FlaskSlime]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(slimes)?)
}

pub fn decode_snapshot(raw: &str) -> Result<Vec<FlaskSlime>, StorageError> {
    Ok(serde_json::from_str(raw)?)
}

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let win = web_sys::window().ok_or(StorageError::Unavailable)?;
    win.local_storage()
        .map_err(|e| StorageError::Access(format!("{e:?}")))?
        .ok_or(StorageError::Unavailable)
}

/// Overwrites the slot with the current flask contents.
pub fn save_local_slimes(slimes: &[FlaskSlime]) -> Result<(), StorageError> {
    let json = encode_snapshot(slimes)?;
    local_storage()?
        .set_item(FLASK_STORAGE_KEY, &json)
        .map_err(|e| StorageError::Access(format!("{e:?}")))
}

/// Reads the slot. `Ok(None)` when nothing was saved.
pub fn load_local_slimes() -> Result<Option<Vec<FlaskSlime>>, StorageError> {
    let raw = local_storage()?
        .get_item(FLASK_STORAGE_KEY)
        .map_err(|e| StorageError::Access(format!("{e:?}")))?;
    match raw {
        Some(raw) => {
            let slimes = decode_snapshot(&raw)?;
            info!("found {} slimes in local storage", slimes.len());
            Ok(Some(slimes))
        }
        None => Ok(None),
    }
}

pub fn clear_local_slimes() {
    match local_storage() {
        Ok(store) => {
            if let Err(e) = store.remove_item(FLASK_STORAGE_KEY) {
                warn!("could not clear flask snapshot: {e:?}");
            }
        }
        Err(e) => warn!("could not clear flask snapshot: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Position, SlimeColor};

    #[test]
    fn snapshot_keeps_identity_and_position() {
        let slimes = vec![
            FlaskSlime {
                id: 3,
                level: 2,
                color: SlimeColor::Verde,
                position: Position { x: 40.5, y: 380.0 },
                velocity_y: 12.0,
            },
            FlaskSlime {
                id: 4,
                level: 1,
                color: SlimeColor::Amarelo,
                position: Position { x: 200.0, y: 402.0 },
                velocity_y: 0.0,
            },
        ];
        let back = decode_snapshot(&encode_snapshot(&slimes).unwrap()).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back[0].id, 3);
        assert_eq!(back[0].color, SlimeColor::Verde);
        assert_eq!(back[0].position, Position { x: 40.5, y: 380.0 });
        // velocity is simulation-only
        assert_eq!(back[0].velocity_y, 0.0);
    }

    #[test]
    fn snapshot_uses_plain_field_names() {
        let json = r#"[{"id":7,"level":1,"color":"Roxo","position":{"x":10.0,"y":20.0}}]"#;
        let slimes = decode_snapshot(json).unwrap();
        assert_eq!(slimes[0].id, 7);
        assert_eq!(slimes[0].color, SlimeColor::Roxo);

        let encoded = encode_snapshot(&slimes).unwrap();
        assert!(!encoded.contains("velocity"));
        assert!(encoded.contains("\"position\":{\"x\":10.0,\"y\":20.0}"));
    }

    #[test]
    fn malformed_snapshot_is_an_error() {
        assert!(matches!(decode_snapshot("{not json"), Err(StorageError::Malformed(_))));
        assert!(matches!(decode_snapshot(r#"[{"id":1}]"#), Err(StorageError::Malformed(_))));
    }
}
