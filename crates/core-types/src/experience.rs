use std::collections::BTreeMap;

/// Experience awarded per gathered item, keyed by item category.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperienceTable {
    entries: BTreeMap<&'static str, f64>,
}

impl ExperienceTable {
    pub fn standard() -> Self {
        let entries = BTreeMap::from([("copper ore", 16.5), ("iron ore", 35.5)]);
        Self { entries }
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries.get(category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.entries.iter().map(|(name, xp)| (*name, *xp))
    }

    pub fn is_ore(category: &str) -> bool {
        category.ends_with(" ore")
    }
}

impl Default for ExperienceTable {
    fn default() -> Self {
        Self::standard()
    }
}
