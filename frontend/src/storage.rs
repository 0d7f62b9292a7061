use log::warn;
use sensor_common::{service::ACCESS_TOKEN_KEY, CredentialProvider};

/// Reads the bearer token from `window.localStorage` on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageCredentials;

impl CredentialProvider for LocalStorageCredentials {
    fn bearer_token(&self) -> Option<String> {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => storage,
            _ => {
                warn!("local storage is not available");
                return None;
            }
        };
        storage.get_item(ACCESS_TOKEN_KEY).ok().flatten()
    }
}
