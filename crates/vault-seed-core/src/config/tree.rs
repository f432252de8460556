//! Hierarchical view over flat dotted configuration keys

/// A configuration node rooted at a dotted path
///
/// Entries are stored with their absolute keys in declaration order.
/// Lookups take keys relative to `root_path`. A `Config` returned by
/// `get_config` or `partition` is a detached copy; nothing is shared with
/// the parent.
///
/// ```
/// use vault_seed_core::config::Config;
///
/// let config = Config::from_entries([
///     ("testing.edc.vaults.secret1.key", "api-token"),
///     ("testing.edc.vaults.secret1.value", "abc123"),
/// ]);
/// let vaults = config.get_config("testing.edc.vaults");
/// let partitions = vaults.partition();
/// assert_eq!(partitions.len(), 1);
/// assert_eq!(partitions[0].get_string("key"), "api-token");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    root: String,
    entries: Vec<(String, String)>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a root config from `(key, value)` pairs
    ///
    /// A repeated key overwrites the earlier value but keeps its position.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut config = Self::new();
        for (key, value) in entries {
            config.set(key, value);
        }
        config
    }

    /// Set a value under a key relative to this node
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let absolute = self.absolute(&key.into());
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == absolute) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((absolute, value)),
        }
    }

    /// Absolute dotted path of this node (empty for the top level)
    pub fn root_path(&self) -> &str {
        &self.root
    }

    /// Last segment of the root path, e.g. `secret1` for `testing.edc.vaults.secret1`
    pub fn partition_name(&self) -> &str {
        self.root.rsplit('.').next().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries with absolute keys, in declaration order
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Entries with keys relative to this node, in declaration order
    pub fn relative_entries(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| self.relative(k).map(|rel| (rel.to_string(), v.clone())))
            .collect()
    }

    /// Sub-configuration rooted at `path` below this node
    ///
    /// Matching is segment-aware: `a.b` covers `a.b` and `a.b.c` but not `a.bc`.
    pub fn get_config(&self, path: &str) -> Config {
        let root = self.absolute(path);
        let entries = self
            .entries
            .iter()
            .filter(|(k, _)| is_under(k, &root))
            .cloned()
            .collect();
        Config { root, entries }
    }

    /// Immediate child nodes, ordered by the first entry declared under each
    ///
    /// A value set exactly at this node's root belongs to no child and is skipped.
    pub fn partition(&self) -> Vec<Config> {
        let mut names: Vec<&str> = Vec::new();
        for (key, _) in &self.entries {
            let Some(relative) = self.relative(key) else {
                continue;
            };
            if relative.is_empty() {
                continue;
            }
            let name = relative.split('.').next().unwrap_or(relative);
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names.into_iter().map(|name| self.get_config(name)).collect()
    }

    pub fn get_string_opt(&self, key: &str) -> Option<&str> {
        let absolute = self.absolute(key);
        self.entries
            .iter()
            .find(|(k, _)| *k == absolute)
            .map(|(_, v)| v.as_str())
    }

    /// String value of `key`, or the empty string when it is absent
    pub fn get_string(&self, key: &str) -> String {
        self.get_string_or(key, "")
    }

    pub fn get_string_or(&self, key: &str, default: &str) -> String {
        self.get_string_opt(key).unwrap_or(default).to_string()
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.get_string_opt(key).is_some()
    }

    /// Overlay `other` onto this config; keys present in both take `other`'s value
    ///
    /// `other`'s keys are taken as absolute.
    pub fn merge(&mut self, other: &Config) {
        for (key, value) in &other.entries {
            match self.entries.iter_mut().find(|(k, _)| k == key) {
                Some(entry) => entry.1 = value.clone(),
                None => self.entries.push((key.clone(), value.clone())),
            }
        }
    }

    fn absolute(&self, key: &str) -> String {
        match (self.root.is_empty(), key.is_empty()) {
            (true, _) => key.to_string(),
            (false, true) => self.root.clone(),
            (false, false) => format!("{}.{}", self.root, key),
        }
    }

    fn relative<'a>(&self, key: &'a str) -> Option<&'a str> {
        if self.root.is_empty() {
            return Some(key);
        }
        let rest = key.strip_prefix(self.root.as_str())?;
        if rest.is_empty() {
            Some(rest)
        } else {
            rest.strip_prefix('.')
        }
    }
}

fn is_under(key: &str, root: &str) -> bool {
    if root.is_empty() {
        return true;
    }
    match key.strip_prefix(root) {
        Some(rest) => rest.is_empty() || rest.starts_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vaults() -> Config {
        Config::from_entries([
            ("testing.edc.vaults.secret1.key", "api-token"),
            ("testing.edc.vaults.secret1.value", "abc123"),
            ("testing.edc.vaults.secret2.key", "db-password"),
            ("testing.edc.vaults.secret2.value", "s3cr3t"),
            ("other.setting", "x"),
        ])
    }

    #[test]
    fn test_get_config_scopes_to_prefix() {
        let sub = vaults().get_config("testing.edc.vaults");
        assert_eq!(sub.root_path(), "testing.edc.vaults");
        assert_eq!(sub.len(), 4);
        assert_eq!(sub.get_string("secret1.key"), "api-token");
        assert!(!sub.has_key("other.setting"));
    }

    #[test]
    fn test_get_config_is_segment_aware() {
        let config = Config::from_entries([
            ("testing.edc.vaults.a.key", "in"),
            ("testing.edc.vaultsX.b.key", "out"),
        ]);
        let sub = config.get_config("testing.edc.vaults");
        assert_eq!(sub.len(), 1);
        assert_eq!(sub.partition().len(), 1);
    }

    #[test]
    fn test_nested_get_config() {
        let sub = vaults().get_config("testing").get_config("edc.vaults");
        assert_eq!(sub.root_path(), "testing.edc.vaults");
        assert_eq!(sub.get_string("secret2.value"), "s3cr3t");
    }

    #[test]
    fn test_partition_preserves_declaration_order() {
        let config = Config::from_entries([
            ("p.zeta.key", "1"),
            ("p.alpha.key", "2"),
            ("p.zeta.value", "3"),
            ("p.mid.value", "4"),
        ]);
        let names: Vec<_> = config
            .get_config("p")
            .partition()
            .iter()
            .map(|c| c.partition_name().to_string())
            .collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_partition_lookups_are_relative() {
        let partitions = vaults().get_config("testing.edc.vaults").partition();
        assert_eq!(partitions.len(), 2);
        assert_eq!(partitions[1].root_path(), "testing.edc.vaults.secret2");
        assert_eq!(partitions[1].get_string("key"), "db-password");
        assert_eq!(
            partitions[1].relative_entries(),
            vec![
                ("key".to_string(), "db-password".to_string()),
                ("value".to_string(), "s3cr3t".to_string()),
            ]
        );
    }

    #[test]
    fn test_value_at_root_is_not_a_partition() {
        let config = Config::from_entries([("p", "root-value"), ("p.child.key", "k")]);
        let sub = config.get_config("p");
        assert_eq!(sub.get_string(""), "root-value");
        assert_eq!(sub.partition().len(), 1);
    }

    #[test]
    fn test_empty_namespace() {
        let sub = vaults().get_config("missing.prefix");
        assert!(sub.is_empty());
        assert!(sub.partition().is_empty());
    }

    #[test]
    fn test_missing_key_defaults() {
        let config = Config::from_entries([("a", "1")]);
        assert_eq!(config.get_string("b"), "");
        assert_eq!(config.get_string_or("b", "fallback"), "fallback");
        assert_eq!(config.get_string_opt("b"), None);
        assert_eq!(config.get_string_opt("a"), Some("1"));
    }

    #[test]
    fn test_duplicate_key_keeps_first_position() {
        let config = Config::from_entries([("a", "1"), ("b", "2"), ("a", "3")]);
        assert_eq!(
            config.entries(),
            &[
                ("a".to_string(), "3".to_string()),
                ("b".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_merge_overrides() {
        let mut base = Config::from_entries([("a", "1"), ("b", "2")]);
        base.merge(&Config::from_entries([("b", "20"), ("c", "30")]));
        assert_eq!(base.get_string("a"), "1");
        assert_eq!(base.get_string("b"), "20");
        assert_eq!(base.get_string("c"), "30");
        assert_eq!(base.len(), 3);
    }
}
