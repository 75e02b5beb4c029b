//! Builds an unbalanced BST and an AVL tree from the same product catalog and reports how long
//! each operation takes and what shape each tree ends up in. Then does the same with sorted ids,
//! where the unbalanced tree degenerates into a chain.

mod logger;

use std::time::{Duration, Instant};

use clap::Parser;
use log::{error, info};
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use avl_bst::avl::BalancedTree;
use avl_bst::dataset::{generate_products, sorted_products, DatasetConfig, DatasetError};
use avl_bst::filter::{filter_products, ProductFilter};
use avl_bst::product::{Category, Product};
use avl_bst::traversal::{breadth_first, depth_first};
use avl_bst::unbalanced::UnbalancedTree;

#[derive(Debug, Parser)]
#[clap(name = "compare", about = "Compare an unbalanced BST with an AVL tree")]
struct CliOpts {
    /// Number of products in the random catalog.
    #[clap(long, default_value_t = 10_000)]
    size: usize,

    /// Seed for the catalog and for picking keys to search and delete.
    #[clap(long, default_value_t = 42)]
    seed: u64,

    /// How many random searches to time.
    #[clap(long, default_value_t = 1000)]
    searches: usize,

    /// How many random deletes to time.
    #[clap(long, default_value_t = 100)]
    deletes: usize,

    /// Number of products inserted in ascending id order for the worst case.
    #[clap(long, default_value_t = 5000)]
    worst_case_size: u32,
}

/// The operations timed on both trees.
trait Benchmarked {
    const NAME: &'static str;

    fn insert(&mut self, product: Product);
    fn contains(&self, id: u32) -> bool;
    fn delete(&mut self, id: u32);
    fn height(&self) -> usize;
    /// Extra shape information worth reporting.
    fn describe(&self) -> String;
}

impl Benchmarked for UnbalancedTree<u32, Product> {
    const NAME: &'static str = "unbalanced BST";

    fn insert(&mut self, product: Product) {
        UnbalancedTree::insert(self, product.id, product);
    }

    fn contains(&self, id: u32) -> bool {
        self.search(&id).is_some()
    }

    fn delete(&mut self, id: u32) {
        UnbalancedTree::delete(self, &id);
    }

    fn height(&self) -> usize {
        UnbalancedTree::height(self)
    }

    fn describe(&self) -> String {
        format!("{} nodes", self.len())
    }
}

impl Benchmarked for BalancedTree<u32, Product> {
    const NAME: &'static str = "AVL tree";

    fn insert(&mut self, product: Product) {
        BalancedTree::insert(self, product.id, product);
    }

    fn contains(&self, id: u32) -> bool {
        self.search(&id).is_some()
    }

    fn delete(&mut self, id: u32) {
        BalancedTree::delete(self, &id);
    }

    fn height(&self) -> usize {
        BalancedTree::height(self)
    }

    fn describe(&self) -> String {
        format!(
            "{} nodes, balanced: {}, root balance: {:+}",
            self.len(),
            self.is_balanced(),
            self.root().map_or(0, |r| r.balance())
        )
    }
}

/// Times `f`.
fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Runs inserts, searches, and deletes against a fresh tree and logs the results. Returns the
/// tree as it was before the deletes.
fn measure<T>(products: &[Product], search_ids: &[u32], delete_ids: &[u32]) -> T
where
    T: Benchmarked + Default,
{
    info!("--- {} ---", T::NAME);

    let (mut tree, elapsed) = timed(|| {
        let mut tree = T::default();
        for product in products {
            tree.insert(product.clone());
        }
        tree
    });
    info!(
        "inserted {} products in {:?}; height {} ({})",
        products.len(),
        elapsed,
        tree.height(),
        tree.describe()
    );

    let (found, elapsed) = timed(|| search_ids.iter().filter(|id| tree.contains(**id)).count());
    info!(
        "{} searches in {:?} ({:?} each), found {}",
        search_ids.len(),
        elapsed,
        elapsed / search_ids.len().max(1) as u32,
        found
    );

    let before_deletes = products.len();
    let ((), elapsed) = timed(|| {
        for id in delete_ids {
            tree.delete(*id);
        }
    });
    info!(
        "{} deletes in {:?}; height {} ({}, {} products before)",
        delete_ids.len(),
        elapsed,
        tree.height(),
        tree.describe(),
        before_deletes
    );

    tree
}

/// Random catalog: both trees, then traversals and a filter over the AVL tree.
fn random_catalog(opts: &CliOpts) -> Result<(), DatasetError> {
    let config = DatasetConfig::default()
        .with_size(opts.size)
        .with_seed(opts.seed);
    let products = generate_products(&config)?;

    let mut rng = Pcg64::seed_from_u64(opts.seed.wrapping_add(1));
    let pick = |rng: &mut Pcg64, n: usize| -> Vec<u32> {
        (0..n)
            .filter_map(|_| products.choose(rng).map(|p| p.id))
            .collect()
    };
    let search_ids = pick(&mut rng, opts.searches);
    let delete_ids = pick(&mut rng, opts.deletes);

    measure::<UnbalancedTree<u32, Product>>(&products, &search_ids, &delete_ids);
    let avl = measure::<BalancedTree<u32, Product>>(&products, &search_ids, &delete_ids);

    let (dfs, elapsed) = timed(|| depth_first(avl.root()).len());
    info!("depth-first visited {} nodes in {:?}", dfs, elapsed);
    let (bfs, elapsed) = timed(|| breadth_first(avl.root()).len());
    info!("breadth-first visited {} nodes in {:?}", bfs, elapsed);

    let filter = ProductFilter::new()
        .category(Category::Electronics)
        .max_price(500.0);
    let matches = filter_products(avl.root(), &filter);
    info!("{} electronics at $500.00 or less", matches.len());
    for product in matches.iter().take(3) {
        info!("  {}", product);
    }

    Ok(())
}

/// Sorted ids: the unbalanced tree turns into a chain while the AVL tree stays shallow.
fn worst_case(opts: &CliOpts) {
    let products = sorted_products(opts.worst_case_size);
    let ideal = (products.len() as f64 + 1.0).log2().ceil();
    info!(
        "=== worst case: {} products in ascending id order (ideal height {}) ===",
        products.len(),
        ideal
    );

    let ids: Vec<u32> = products.iter().map(|p| p.id).collect();
    measure::<UnbalancedTree<u32, Product>>(&products, &ids, &[]);
    measure::<BalancedTree<u32, Product>>(&products, &ids, &[]);
}

fn run(opts: &CliOpts) -> Result<(), DatasetError> {
    info!("=== random catalog: {} products (seed {}) ===", opts.size, opts.seed);
    random_catalog(opts)?;
    worst_case(opts);
    Ok(())
}

pub fn main() {
    // Initialize the logger
    logger::initialize_logger();

    let opts = CliOpts::parse();
    log::trace!("Arguments: {:?}", opts);

    if let Err(err) = run(&opts) {
        error!("{}", err);
        std::process::exit(1);
    }
}
