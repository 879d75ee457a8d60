//! JSON values in LocalStorage
//!
//! Native builds have no storage: loads miss and saves are dropped.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Parse a stored value, treating corrupt data as missing
pub fn decode<T: DeserializeOwned>(key: &str, json: &str) -> Option<T> {
    match serde_json::from_str(json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring corrupt {}: {}", key, e);
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Load a value from LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let json = local_storage()?.get_item(key).ok()??;
    decode(key, &json)
}

/// Save a value to LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn save<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = local_storage() else {
        log::warn!("LocalStorage unavailable, {} not saved", key);
        return;
    };
    match serde_json::to_string(value) {
        Ok(json) => {
            if let Err(e) = storage.set_item(key, &json) {
                log::warn!("Failed to save {}: {:?}", key, e);
            }
        }
        Err(e) => log::warn!("Failed to encode {}: {}", key, e),
    }
}

/// Native stubs
#[cfg(not(target_arch = "wasm32"))]
pub fn load<T: DeserializeOwned>(_key: &str) -> Option<T> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save<T: Serialize>(_key: &str, _value: &T) {
    // No-op for native
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_decode_corrupt_is_none() {
        assert!(decode::<Settings>("settings", "{not json").is_none());
        assert!(decode::<Settings>("settings", r#"{"columns": "wide"}"#).is_none());
    }

    #[test]
    fn test_decode_valid() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        let settings: Settings = decode("settings", &json).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_native_load_misses() {
        assert!(load::<Settings>("bug_crossing_settings").is_none());
    }
}
