//! Selecting products out of a tree by category, price, and rating.
//!
//! # Examples
//!
//! ```
//! use avl_bst::avl::BalancedTree;
//! use avl_bst::filter::{filter_products, ProductFilter};
//! use avl_bst::product::{Category, Product};
//!
//! let mut tree = BalancedTree::new();
//! for (id, category, price) in [
//!     (1, Category::Electronics, 100.0),
//!     (2, Category::Clothing, 50.0),
//!     (3, Category::Electronics, 900.0),
//! ] {
//!     let product = Product {
//!         id,
//!         name: format!("Product {}", id),
//!         category,
//!         price,
//!         stock: 10,
//!         rating: 4.0,
//!     };
//!     tree.insert(id, product);
//! }
//!
//! let cheap_electronics = ProductFilter::new()
//!     .category(Category::Electronics)
//!     .max_price(500.0);
//! let found = filter_products(tree.root(), &cheap_electronics);
//!
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].id, 1);
//! ```

use crate::node::TreeNode;
use crate::product::{Category, Product};

/// A conjunction of optional conditions on a [`Product`]. Conditions that are not set always
/// pass, so `ProductFilter::new()` matches everything.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProductFilter {
    category: Option<Category>,
    max_price: Option<f64>,
    min_rating: Option<f32>,
}

impl ProductFilter {
    /// A filter that matches every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only keep products in `category`.
    pub fn category(self, category: Category) -> Self {
        Self {
            category: Some(category),
            ..self
        }
    }

    /// Only keep products priced at `max_price` or less.
    pub fn max_price(self, max_price: f64) -> Self {
        Self {
            max_price: Some(max_price),
            ..self
        }
    }

    /// Only keep products rated `min_rating` or more.
    pub fn min_rating(self, min_rating: f32) -> Self {
        Self {
            min_rating: Some(min_rating),
            ..self
        }
    }

    /// Whether `product` passes every condition that is set.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.map_or(true, |c| product.category == c)
            && self.max_price.map_or(true, |max| product.price <= max)
            && self.min_rating.map_or(true, |min| product.rating >= min)
    }
}

/// Collects every product under `root` that passes `filter`.
///
/// Nodes are visited depth-first with an explicit stack (pre-order, left before right), and
/// matches are returned in that visiting order.
pub fn filter_products<'a, N>(root: Option<&'a N>, filter: &ProductFilter) -> Vec<&'a Product>
where
    N: TreeNode<Value = Product>,
{
    let mut results = Vec::new();
    let mut stack: Vec<&N> = root.into_iter().collect();

    while let Some(current) = stack.pop() {
        let product = current.value();
        if filter.matches(product) {
            results.push(product);
        }

        stack.extend(current.right());
        stack.extend(current.left());
    }

    results
}
