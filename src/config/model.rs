//! The validated configuration value.

use indexmap::IndexMap;

use super::types::{Category, ColumnBindings};
use crate::error::ConfigError;

/// Category rules plus column bindings.
///
/// Categories are kept in insertion order. The number of categories `N`
/// is also the number of preference columns every individual carries.
///
/// # Examples
///
/// ```
/// use u_assign::config::{Category, ColumnBindings, Config};
///
/// let config = Config::new(ColumnBindings::default())
///     .with_category(Category::limited("Robotics", 1))
///     .with_category(Category::unlimited("Sports").with_subgroups(2));
/// assert!(config.validate().is_ok());
/// assert_eq!(config.category_count(), 2);
/// assert_eq!(config.position("Sports"), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    categories: IndexMap<String, Category>,
    bindings: ColumnBindings,
}

impl Config {
    /// Creates a configuration with no categories.
    pub fn new(bindings: ColumnBindings) -> Self {
        Self {
            categories: IndexMap::new(),
            bindings,
        }
    }

    /// Adds a category at the end of the iteration order. A category with
    /// the same name is replaced in place.
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.insert(category.name.clone(), category);
        self
    }

    /// Column bindings.
    pub fn bindings(&self) -> &ColumnBindings {
        &self.bindings
    }

    /// Categories in configuration order.
    pub fn categories(&self) -> impl ExactSizeIterator<Item = &Category> {
        self.categories.values()
    }

    /// Special categories in configuration order.
    pub fn special_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values().filter(|c| c.is_special())
    }

    /// Number of categories, which is also the number of preference ranks.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Looks up a category by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// Index of a category in configuration order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.categories.get_index_of(name)
    }

    /// Category at `index` in configuration order.
    pub fn category_at(&self, index: usize) -> Option<&Category> {
        self.categories.get_index(index).map(|(_, c)| c)
    }

    /// Checks the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }

        let b = &self.bindings;
        for (key, value) in [
            ("nameK", &b.name),
            ("sidK", &b.id),
            ("prefMainK", &b.preference_prefix),
            ("extsidK", &b.external_id),
            ("extBK", &b.buddy_group),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyBinding(key));
            }
        }

        for category in self.categories.values() {
            if category.name.trim().is_empty() {
                return Err(ConfigError::BlankCategoryName);
            }
            if category.subgroups == Some(0) {
                return Err(ConfigError::InvalidSubgroupCount {
                    category: category.name.clone(),
                    value: "0".into(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Config {
        Config::new(ColumnBindings::default())
    }

    #[test]
    fn test_validate_empty() {
        assert!(matches!(base().validate(), Err(ConfigError::NoCategories)));
    }

    #[test]
    fn test_validate_zero_subgroups() {
        let config = base().with_category(Category::unlimited("A").with_subgroups(0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSubgroupCount { .. })
        ));
    }

    #[test]
    fn test_validate_empty_binding() {
        let bindings = ColumnBindings {
            buddy_group: " ".into(),
            ..ColumnBindings::default()
        };
        let config = Config::new(bindings).with_category(Category::unlimited("A"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyBinding("extBK"))
        ));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let config = base()
            .with_category(Category::unlimited("Zeta"))
            .with_category(Category::limited("Alpha", 3))
            .with_category(Category::unlimited("Mid").with_subgroups(2));
        let names: Vec<_> = config.categories().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
        let special: Vec<_> = config.special_categories().map(|c| c.name.as_str()).collect();
        assert_eq!(special, ["Mid"]);
        assert_eq!(config.category_at(1).map(|c| c.name.as_str()), Some("Alpha"));
    }

    #[test]
    fn test_replace_keeps_position() {
        let config = base()
            .with_category(Category::unlimited("A"))
            .with_category(Category::unlimited("B"))
            .with_category(Category::limited("A", 2));
        assert_eq!(config.category_count(), 2);
        assert_eq!(config.position("A"), Some(0));
        assert_eq!(
            config.category("A").map(|c| c.capacity),
            Some(crate::config::Capacity::Limited(2))
        );
    }
}
