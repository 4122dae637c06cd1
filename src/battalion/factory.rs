//! Mass-produce battalions by cloning registered prototypes

use crate::battalion::Battalion;
use crate::core::error::{Result, WargameError};
use crate::prototype::PrototypeRegistry;

/// Fills battalions from a prototype registry
pub struct BattalionFactory<'a> {
    registry: &'a PrototypeRegistry,
}

impl<'a> BattalionFactory<'a> {
    /// Create a new factory over the given registry
    pub fn new(registry: &'a PrototypeRegistry) -> Self {
        Self { registry }
    }

    /// Battalion of `count` independent clones of one prototype
    pub fn create_battalion(&self, name: &str, prototype_key: &str, count: usize) -> Result<Battalion> {
        if count < 1 {
            return Err(WargameError::InvalidCount(count));
        }

        let soldiers = (0..count)
            .map(|_| self.registry.clone_prototype(prototype_key))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!("Created battalion '{}' with {} clones of '{}'", name, count, prototype_key);
        Ok(Battalion::with_soldiers(name, soldiers))
    }

    /// Battalion cycling round-robin through `keys` until `total_count` members
    ///
    /// A missing key aborts the whole battalion; nothing partial is returned.
    pub fn create_mixed_battalion<S: AsRef<str>>(
        &self,
        name: &str,
        keys: &[S],
        total_count: usize,
    ) -> Result<Battalion> {
        if keys.is_empty() {
            return Err(WargameError::EmptyPrototypeKeys);
        }

        let soldiers = keys
            .iter()
            .cycle()
            .take(total_count)
            .map(|key| self.registry.clone_prototype(key.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(
            "Created mixed battalion '{}' with {} soldiers from {} prototypes",
            name,
            soldiers.len(),
            keys.len()
        );
        Ok(Battalion::with_soldiers(name, soldiers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soldier::SoldierBuilder;

    fn registry() -> PrototypeRegistry {
        let mut registry = PrototypeRegistry::new();
        for key in ["Alpha", "Bravo"] {
            registry.register(key, SoldierBuilder::new().with_name(key).build().unwrap());
        }
        registry
    }

    #[test]
    fn test_create_battalion() {
        let registry = registry();
        let factory = BattalionFactory::new(&registry);

        let battalion = factory.create_battalion("First", "Alpha", 4).unwrap();
        assert_eq!(battalion.name(), "First");
        assert_eq!(battalion.len(), 4);

        let mut ids: Vec<_> = battalion.soldiers().iter().map(|s| s.id()).collect();
        ids.sort_by_key(|id| id.0);
        ids.dedup();
        assert_eq!(ids.len(), 4);
        assert!(!ids.contains(&registry.get("Alpha").unwrap().id()));
    }

    #[test]
    fn test_zero_count_rejected() {
        let registry = registry();
        let err = BattalionFactory::new(&registry)
            .create_battalion("Empty", "Alpha", 0)
            .unwrap_err();
        assert!(matches!(err, WargameError::InvalidCount(0)));
    }

    #[test]
    fn test_missing_prototype() {
        let registry = registry();
        let err = BattalionFactory::new(&registry)
            .create_battalion("Lost", "Charlie", 3)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_mixed_round_robin() {
        let registry = registry();
        let battalion = BattalionFactory::new(&registry)
            .create_mixed_battalion("Mixed", &["Alpha", "Bravo"], 5)
            .unwrap();

        let names: Vec<_> = battalion.soldiers().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "Alpha [Clone]",
                "Bravo [Clone]",
                "Alpha [Clone]",
                "Bravo [Clone]",
                "Alpha [Clone]"
            ]
        );
    }

    #[test]
    fn test_mixed_requires_keys() {
        let registry = registry();
        let keys: [&str; 0] = [];
        let err = BattalionFactory::new(&registry)
            .create_mixed_battalion("None", &keys, 3)
            .unwrap_err();
        assert!(matches!(err, WargameError::EmptyPrototypeKeys));
    }

    #[test]
    fn test_mixed_missing_key_aborts() {
        let registry = registry();
        let err = BattalionFactory::new(&registry)
            .create_mixed_battalion("Broken", &["Alpha", "Ghost"], 4)
            .unwrap_err();
        assert!(matches!(err, WargameError::PrototypeNotFound(ref k) if k == "Ghost"));
    }

    #[test]
    fn test_mixed_unused_missing_key_is_fine() {
        // "Ghost" is never reached with a single member
        let registry = registry();
        let battalion = BattalionFactory::new(&registry)
            .create_mixed_battalion("Short", &["Alpha", "Ghost"], 1)
            .unwrap();
        assert_eq!(battalion.len(), 1);
    }

    #[test]
    fn test_mixed_zero_total_is_empty() {
        let registry = registry();
        let battalion = BattalionFactory::new(&registry)
            .create_mixed_battalion("Paper", &["Alpha"], 0)
            .unwrap();
        assert!(battalion.is_empty());
    }
}
