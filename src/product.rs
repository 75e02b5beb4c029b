//! The payload both trees are benchmarked with: a product from a simulated store catalog, keyed
//! by its `id`.

use std::fmt;

/// The department a [`Product`] is listed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Phones, notebooks, headphones...
    Electronics,
    /// Shirts, sneakers, backpacks...
    Clothing,
    /// Anything printed.
    Books,
    /// Furniture and housewares.
    Home,
    /// Sporting goods.
    Sports,
    /// Groceries.
    Food,
}

impl Category {
    /// Every category, in listing order.
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Clothing,
        Category::Books,
        Category::Home,
        Category::Sports,
        Category::Food,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Books => "Books",
            Category::Home => "Home",
            Category::Sports => "Sports",
            Category::Food => "Food",
        };
        f.write_str(name)
    }
}

/// A catalog entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    /// Unique identifier, used as the tree key.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Department.
    pub category: Category,
    /// Unit price, rounded to cents.
    pub price: f64,
    /// Units on hand.
    pub stock: u32,
    /// Average customer rating between 1.0 and 5.0, one decimal place.
    pub rating: f32,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({}): ${:.2}, {} in stock, rated {:.1}",
            self.id, self.name, self.category, self.price, self.stock, self.rating
        )
    }
}
