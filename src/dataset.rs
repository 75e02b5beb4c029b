//! Synthetic product catalogs to fill the trees with.
//!
//! [`generate_products`] draws unique ids at random from a range several times larger than the
//! catalog so the insertion order is far from sorted, which is the friendly case for an
//! [`UnbalancedTree`][crate::unbalanced::UnbalancedTree]. [`sorted_products`] is the hostile
//! case: ascending ids, which turn an unbalanced tree into a chain.
//!
//! # Examples
//!
//! ```
//! use avl_bst::dataset::{generate_products, DatasetConfig};
//!
//! let config = DatasetConfig::default().with_size(50).with_seed(7);
//! let products = generate_products(&config)?;
//!
//! assert_eq!(products.len(), 50);
//! assert!(products.iter().all(|p| (1..=500).contains(&p.id)));
//!
//! // The same seed always gives the same catalog.
//! assert_eq!(products, generate_products(&config)?);
//! # Ok::<(), avl_bst::dataset::DatasetError>(())
//! ```

use std::collections::HashSet;
use std::convert::TryFrom;

use log::debug;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use thiserror::Error;

use crate::product::{Category, Product};

const NAME_PREFIXES: [&str; 6] = ["Ultra", "Pro", "Smart", "Eco", "Max", "Prime"];
const NAME_ITEMS: [&str; 9] = [
    "Phone", "Notebook", "Shirt", "Book", "Sneakers", "Chair", "Watch", "Headphones", "Backpack",
];
const NAME_SUFFIX_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const NAME_SUFFIX_LEN: usize = 4;

/// Why a [`DatasetConfig`] cannot produce a catalog.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DatasetError {
    /// The price range has no values in it (or a bound is not finite).
    #[error("price range {min}..={max} is empty")]
    EmptyPriceRange {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// The rating range has no values in it (or a bound is not finite).
    #[error("rating range {min}..={max} is empty")]
    EmptyRatingRange {
        /// Lower bound.
        min: f32,
        /// Upper bound.
        max: f32,
    },
    /// There are fewer candidate ids than products.
    #[error("an id spread of 0 leaves no ids for {size} products")]
    IdSpaceTooSmall {
        /// Requested number of products.
        size: usize,
    },
    /// The candidate ids do not fit in a `u32`.
    #[error("{size} products with an id spread of {spread} overflow a u32 id")]
    IdSpaceOverflow {
        /// Requested number of products.
        size: usize,
        /// Requested id spread.
        spread: u32,
    },
}

/// How to generate a catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetConfig {
    /// How many products to generate.
    pub size: usize,
    /// Seed for the random number generator. The same seed gives the same catalog.
    pub seed: u64,
    /// Ids are drawn from `1..=size * id_spread`.
    pub id_spread: u32,
    /// Inclusive price bounds.
    pub price_range: (f64, f64),
    /// Inclusive rating bounds.
    pub rating_range: (f32, f32),
    /// Stock is drawn from `0..=max_stock`.
    pub max_stock: u32,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            size: 1000,
            seed: 42,
            id_spread: 10,
            price_range: (5.0, 3000.0),
            rating_range: (1.0, 5.0),
            max_stock: 500,
        }
    }
}

impl DatasetConfig {
    /// Set how many products to generate.
    pub fn with_size(self, size: usize) -> Self {
        Self { size, ..self }
    }

    /// Set the random seed.
    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    /// Set the id spread.
    pub fn with_id_spread(self, id_spread: u32) -> Self {
        Self { id_spread, ..self }
    }

    /// Set the inclusive price bounds.
    pub fn with_price_range(self, min: f64, max: f64) -> Self {
        Self {
            price_range: (min, max),
            ..self
        }
    }

    /// Set the inclusive rating bounds.
    pub fn with_rating_range(self, min: f32, max: f32) -> Self {
        Self {
            rating_range: (min, max),
            ..self
        }
    }

    /// Set the largest stock count.
    pub fn with_max_stock(self, max_stock: u32) -> Self {
        Self { max_stock, ..self }
    }

    /// The largest id that may be drawn.
    fn max_id(&self) -> Result<u32, DatasetError> {
        let (min_price, max_price) = self.price_range;
        if !(min_price.is_finite() && max_price.is_finite() && min_price <= max_price) {
            return Err(DatasetError::EmptyPriceRange {
                min: min_price,
                max: max_price,
            });
        }
        let (min_rating, max_rating) = self.rating_range;
        if !(min_rating.is_finite() && max_rating.is_finite() && min_rating <= max_rating) {
            return Err(DatasetError::EmptyRatingRange {
                min: min_rating,
                max: max_rating,
            });
        }
        if self.id_spread == 0 && self.size > 0 {
            return Err(DatasetError::IdSpaceTooSmall { size: self.size });
        }

        u32::try_from(self.size)
            .ok()
            .and_then(|size| size.checked_mul(self.id_spread))
            .ok_or(DatasetError::IdSpaceOverflow {
                size: self.size,
                spread: self.id_spread,
            })
    }
}

/// Generates `config.size` products with unique, randomly drawn ids.
pub fn generate_products(config: &DatasetConfig) -> Result<Vec<Product>, DatasetError> {
    let max_id = config.max_id()?;
    let mut rng = Pcg64::seed_from_u64(config.seed);
    let mut used_ids = HashSet::with_capacity(config.size);
    let mut products = Vec::with_capacity(config.size);

    while products.len() < config.size {
        let id = rng.random_range(1..=max_id);
        if !used_ids.insert(id) {
            continue;
        }

        products.push(Product {
            id,
            name: product_name(&mut rng),
            category: Category::ALL[rng.random_range(0..Category::ALL.len())],
            price: round_to(rng.random_range(config.price_range.0..=config.price_range.1), 100.0),
            stock: rng.random_range(0..=config.max_stock),
            rating: round_to(
                f64::from(rng.random_range(config.rating_range.0..=config.rating_range.1)),
                10.0,
            ) as f32,
        });
    }

    debug!(
        "generated {} products with ids up to {} (seed {})",
        products.len(),
        max_id,
        config.seed
    );
    Ok(products)
}

/// `n` products with ids `0..n` in ascending order: the worst insertion order for a plain BST.
pub fn sorted_products(n: u32) -> Vec<Product> {
    (0..n)
        .map(|id| Product {
            id,
            name: format!("Product {}", id),
            category: Category::ALL[id as usize % Category::ALL.len()],
            price: 1.0,
            stock: 0,
            rating: 1.0,
        })
        .collect()
}

/// A name like `"Smart Watch X7Q2"`.
fn product_name(rng: &mut impl Rng) -> String {
    let prefix = NAME_PREFIXES[rng.random_range(0..NAME_PREFIXES.len())];
    let item = NAME_ITEMS[rng.random_range(0..NAME_ITEMS.len())];
    let suffix: String = (0..NAME_SUFFIX_LEN)
        .map(|_| char::from(NAME_SUFFIX_CHARS[rng.random_range(0..NAME_SUFFIX_CHARS.len())]))
        .collect();

    format!("{} {} {}", prefix, item, suffix)
}

/// Rounds `x` to the nearest multiple of `1 / scale`.
fn round_to(x: f64, scale: f64) -> f64 {
    (x * scale).round() / scale
}
