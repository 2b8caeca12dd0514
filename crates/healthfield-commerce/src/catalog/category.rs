//! Navigation taxonomy for the storefront.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// How a category is surfaced in navigation.
///
/// The storefront has two menus: shop-by-category (medicine, vitamins,
/// beauty) and shop-by-condition (heart, diabetes, women's and men's
/// health). Both are flat lists, not a hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryKind {
    /// A product category.
    #[default]
    Category,
    /// A health-condition grouping.
    Condition,
}

impl CategoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::Category => "category",
            CategoryKind::Condition => "condition",
        }
    }
}

/// A navigation category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier (the slug).
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Kind of navigation entry.
    pub kind: CategoryKind,
    /// Category description.
    pub description: Option<String>,
    /// Category image URL.
    pub image_url: Option<String>,
    /// Sort order position within its menu.
    pub position: i32,
}

impl Category {
    /// Create a product category.
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            id: CategoryId::new(slug.clone()),
            name: name.into(),
            slug,
            kind: CategoryKind::Category,
            description: None,
            image_url: None,
            position: 0,
        }
    }

    /// Create a condition grouping.
    pub fn condition(name: impl Into<String>, slug: impl Into<String>) -> Self {
        let mut category = Self::new(name, slug);
        category.kind = CategoryKind::Condition;
        category
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the sort position.
    pub fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// The route this category is served under.
    pub fn route_path(&self) -> String {
        match self.kind {
            CategoryKind::Category => format!("/categories/{}", self.slug),
            CategoryKind::Condition => format!("/condition/{}", self.slug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_route() {
        let cat = Category::new("Beauty, Care & Cosmetics", "beauty-care-cosmetics");
        assert_eq!(cat.kind, CategoryKind::Category);
        assert_eq!(cat.route_path(), "/categories/beauty-care-cosmetics");
        assert_eq!(cat.id.as_str(), "beauty-care-cosmetics");
    }

    #[test]
    fn test_condition_route() {
        let cat = Category::condition("Diabetes Care", "diabetes");
        assert_eq!(cat.kind, CategoryKind::Condition);
        assert_eq!(cat.route_path(), "/condition/diabetes");
    }
}
