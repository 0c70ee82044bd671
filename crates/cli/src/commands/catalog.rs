//! Catalog browsing commands.

#![allow(clippy::print_stdout)]

use loomwear_core::{CategoryId, ProductId};
use loomwear_storefront::catalog::{Catalog, DEFAULT_RELATED_LIMIT, Product};
use loomwear_storefront::error::{AppError, Result};
use loomwear_storefront::store::ShopStore;

fn print_line(product: &Product) {
    println!(
        "{:>4}  {:<24} {:>8}  {}",
        product.id,
        product.name,
        product.price.to_string(),
        product.category
    );
}

/// List catalog products, optionally filtered.
pub fn list(category: Option<&str>, featured: bool, best_sellers: bool, new_arrivals: bool) {
    let catalog = Catalog::shared();

    let products: Vec<&Product> = if let Some(category) = category {
        catalog.by_category(&CategoryId::new(category))
    } else if featured {
        catalog.featured()
    } else if best_sellers {
        catalog.best_sellers()
    } else if new_arrivals {
        catalog.new_arrivals()
    } else {
        catalog.products().iter().collect()
    };

    if products.is_empty() {
        println!("No matching products.");
        return;
    }

    for product in products {
        print_line(product);
    }
}

/// Show one product in detail and record the view.
pub fn show(store: &mut ShopStore, id: &str) -> Result<()> {
    let catalog = Catalog::shared();
    let product_id = ProductId::new(id);
    let product = catalog
        .product(&product_id)
        .ok_or_else(|| AppError::ProductNotFound(product_id.clone()))?;

    // Viewing a product detail page records it as recently viewed
    store.add_to_recently_viewed(product.clone());

    println!("{}  ({})", product.name, product.id);
    println!("  price:       {}", product.price);
    println!("  category:    {}", product.category);
    if !product.sizes.is_empty() {
        println!("  sizes:       {}", product.sizes.join(", "));
    }
    if !product.colors.is_empty() {
        println!("  colors:      {}", product.colors.join(", "));
    }
    println!("  {}", product.description);

    let related = catalog.related(&product_id, DEFAULT_RELATED_LIMIT);
    if !related.is_empty() {
        println!("\nYou may also like:");
        for product in related {
            print_line(product);
        }
    }

    Ok(())
}

/// Search products by name, description, or category.
pub fn search(query: &str) {
    let hits = Catalog::shared().search(query);
    if hits.is_empty() {
        println!("No products match \"{query}\".");
        return;
    }

    for product in hits {
        print_line(product);
    }
}
