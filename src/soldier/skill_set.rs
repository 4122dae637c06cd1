//! Ordered, duplicate-free set of skills

use serde::{Deserialize, Serialize};

use crate::catalog::SkillType;

/// Skills held by a soldier, in the order they were learned
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(Vec<SkillType>);

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a skill; returns false if it was already present
    pub fn insert(&mut self, skill: SkillType) -> bool {
        if self.0.contains(&skill) {
            return false;
        }
        self.0.push(skill);
        true
    }

    /// Remove a skill; returns false if it was not present
    pub fn remove(&mut self, skill: SkillType) -> bool {
        let before = self.0.len();
        self.0.retain(|s| *s != skill);
        self.0.len() != before
    }

    pub fn contains(&self, skill: SkillType) -> bool {
        self.0.contains(&skill)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillType> {
        self.0.iter()
    }

    /// Sum of catalog point costs
    pub fn point_cost(&self) -> u32 {
        self.0.iter().map(|s| s.point_cost()).sum()
    }
}

impl FromIterator<SkillType> for SkillSet {
    fn from_iter<I: IntoIterator<Item = SkillType>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for skill in iter {
            set.insert(skill);
        }
        set
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = &'a SkillType;
    type IntoIter = std::slice::Iter<'a, SkillType>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = SkillSet::new();
        assert!(set.insert(SkillType::Medic));
        assert!(!set.insert(SkillType::Medic));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let set: SkillSet = [SkillType::Stealth, SkillType::Hacker, SkillType::Stealth, SkillType::Medic]
            .into_iter()
            .collect();
        let order: Vec<_> = set.iter().copied().collect();
        assert_eq!(order, vec![SkillType::Stealth, SkillType::Hacker, SkillType::Medic]);
    }

    #[test]
    fn test_remove() {
        let mut set: SkillSet = [SkillType::Engineer].into_iter().collect();
        assert!(set.remove(SkillType::Engineer));
        assert!(!set.remove(SkillType::Engineer));
        assert!(set.is_empty());
    }

    #[test]
    fn test_point_cost() {
        let set: SkillSet = [SkillType::Commander, SkillType::Survivalist].into_iter().collect();
        assert_eq!(set.point_cost(), 55);
    }
}
