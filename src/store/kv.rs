use std::collections::HashMap;
use std::sync::RwLock;

/// Minimal persistence contract the profile sidecar needs: string keys to
/// JSON string values, nothing else.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
}

/// Process-local backend. Swap in a durable one without touching the stores.
#[derive(Default)]
pub struct MemoryKv {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .expect("kv lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.entries
            .write()
            .expect("kv lock poisoned")
            .insert(key.to_owned(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let kv = MemoryKv::new();
        assert_eq!(kv.get("profile_1"), None);

        kv.set("profile_1", "{}".into());
        assert_eq!(kv.get("profile_1").as_deref(), Some("{}"));

        kv.set("profile_1", r#"{"bio":"x"}"#.into());
        assert_eq!(kv.get("profile_1").as_deref(), Some(r#"{"bio":"x"}"#));
    }
}
