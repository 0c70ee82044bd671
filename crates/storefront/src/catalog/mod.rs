//! Static product catalog.
//!
//! The catalog is a read-only data source: product data is embedded in
//! the binary as JSON and parsed once at first access. The shop state
//! store references catalog products but never mutates them.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use loomwear_core::{CategoryId, Price, ProductId};

/// Default number of related products returned by [`Catalog::related`].
pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Primary image URL.
    pub image: String,
    /// Long-form description.
    pub description: String,
    /// Category this product belongs to.
    pub category: CategoryId,
    /// Shown in the featured carousel.
    #[serde(default)]
    pub featured: bool,
    /// Shown in the best-sellers carousel.
    #[serde(default)]
    pub best_seller: bool,
    /// Shown in the new-arrivals carousel.
    #[serde(default)]
    pub new_arrival: bool,
    /// Available sizes, if the product has size options.
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Available colors, if the product has color options.
    #[serde(default)]
    pub colors: Vec<String>,
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category ID (used as the URL slug).
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Category tile image URL.
    pub image: String,
}

#[derive(Debug, Deserialize)]
struct CatalogData {
    products: Vec<Product>,
    categories: Vec<Category>,
}

/// The read-only product catalog.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    let data: CatalogData = serde_json::from_str(include_str!("catalog.json"))
        .expect("embedded catalog data is valid JSON");
    Catalog {
        products: data.products,
        categories: data.categories,
    }
});

impl Catalog {
    /// The shared catalog instance, parsed on first access.
    #[must_use]
    pub fn shared() -> &'static Self {
        &CATALOG
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories, in catalog order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a category by ID.
    #[must_use]
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// All products in a category.
    #[must_use]
    pub fn by_category(&self, category: &CategoryId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| &p.category == category)
            .collect()
    }

    /// Products flagged as featured.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Products flagged as best sellers.
    #[must_use]
    pub fn best_sellers(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.best_seller).collect()
    }

    /// Products flagged as new arrivals.
    #[must_use]
    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.new_arrival).collect()
    }

    /// Up to `limit` products in the same category, excluding the
    /// product itself. Returns an empty list for an unknown ID.
    #[must_use]
    pub fn related(&self, id: &ProductId, limit: usize) -> Vec<&Product> {
        let Some(product) = self.product(id) else {
            return Vec::new();
        };

        self.products
            .iter()
            .filter(|p| p.category == product.category && &p.id != id)
            .take(limit)
            .collect()
    }

    /// Case-insensitive substring search over name, description, and
    /// category.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query)
                    || p.category.as_str().to_lowercase().contains(&query)
            })
            .collect()
    }
}
