use std::collections::{BTreeMap, HashMap};
use std::env;

/// A key/value store that fields are resolved against
///
/// Returns `None` when the key is not set. Empty values are returned as-is and
/// treated as missing by the loader.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The process-wide environment
///
/// Reads are not synchronised with writers: concurrent loads and `set_var`
/// calls from other threads race on the same store.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) => Some(value),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                tracing::warn!(key, "environment variable is not valid unicode, ignoring");
                None
            }
        }
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_map_source() {
        let mut map = HashMap::new();
        map.insert("APP_ENV".to_string(), "production".to_string());

        assert_eq!(map.var("APP_ENV"), Some("production".to_string()));
        assert_eq!(map.var("DB_NAME"), None);
    }

    #[test]
    fn test_btree_map_source_keeps_empty_values() {
        let map = BTreeMap::from([("SOME_KEY".to_string(), String::new())]);

        assert_eq!(map.var("SOME_KEY"), Some(String::new()));
    }

    #[test]
    fn test_process_env_source() {
        temp_env::with_vars(
            [
                ("ENVBIND_SOURCE_SET", Some("value")),
                ("ENVBIND_SOURCE_UNSET", None),
            ],
            || {
                assert_eq!(ProcessEnv.var("ENVBIND_SOURCE_SET"), Some("value".to_string()));
                assert_eq!(ProcessEnv.var("ENVBIND_SOURCE_UNSET"), None);
            },
        );
    }

    #[test]
    fn test_reference_source() {
        let map = HashMap::from([("KEY".to_string(), "v".to_string())]);
        let by_ref: &dyn EnvSource = &map;

        assert_eq!((&by_ref).var("KEY"), Some("v".to_string()));
    }
}
