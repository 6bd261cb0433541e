use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::store::KeyValueStore;

use super::next_id;

const PRODUCTS_KEY: &str = "flower_lighting_products";

/// Catalog CRUD over the injected store. The whole collection is read and
/// rewritten on every mutation.
pub struct ProductRepository {
    store: Arc<dyn KeyValueStore>,
}

impl ProductRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns the stored catalog. Without a storage context the catalog is
    /// empty; the first read against a writable but empty store seeds the
    /// default catalog and persists it.
    pub fn list(&self) -> Result<Vec<Product>> {
        if !self.store.is_available() {
            return Ok(Vec::new());
        }

        match self.store.get(PRODUCTS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => self.seed_defaults(),
        }
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        Ok(self.list()?.into_iter().find(|p| p.id == id))
    }

    pub fn in_category(&self, category: &str) -> Result<Vec<Product>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|p| p.category == category)
            .collect())
    }

    pub fn create(&self, product: CreateProduct) -> Result<Product> {
        if !self.store.is_available() {
            return Err(Error::Unavailable);
        }

        let mut products = self.list()?;
        let product = Product {
            id: next_id(products.iter().map(|p| p.id)),
            name: product.name,
            category: product.category,
            price: product.price,
            description: product.description,
        };
        products.push(product.clone());
        self.persist(&products)?;

        debug!(id = product.id, "product created");
        Ok(product)
    }

    /// Shallow merge: only the fields present in `changes` are replaced.
    pub fn update(&self, id: i64, changes: UpdateProduct) -> Result<Product> {
        if !self.store.is_available() {
            return Err(Error::Unavailable);
        }

        let mut products = self.list()?;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(Error::NotFound("product"))?;

        if let Some(name) = changes.name {
            product.name = name;
        }
        if let Some(category) = changes.category {
            product.category = category;
        }
        if let Some(price) = changes.price {
            product.price = price;
        }
        if let Some(description) = changes.description {
            product.description = description;
        }

        let updated = product.clone();
        self.persist(&products)?;
        Ok(updated)
    }

    /// Deleting an id that is not present is a no-op, not an error.
    pub fn delete(&self, id: i64) -> Result<()> {
        if !self.store.is_available() {
            return Err(Error::Unavailable);
        }

        let products: Vec<Product> = self.list()?.into_iter().filter(|p| p.id != id).collect();
        self.persist(&products)
    }

    fn persist(&self, products: &[Product]) -> Result<()> {
        self.store.set(PRODUCTS_KEY, &serde_json::to_string(products)?)
    }

    fn seed_defaults(&self) -> Result<Vec<Product>> {
        let products = default_products();
        self.persist(&products)?;
        debug!(count = products.len(), "seeded default catalog");
        Ok(products)
    }
}

fn default_products() -> Vec<Product> {
    [
        (
            1,
            "Crystal Chandelier",
            "chandeliers",
            2500.0,
            "Beautiful crystal chandelier for luxury interiors",
        ),
        (
            2,
            "LED Ceiling Light",
            "lights",
            450.0,
            "Modern LED ceiling light with adjustable brightness",
        ),
        (
            3,
            "Wall Sconce",
            "lights",
            350.0,
            "Elegant wall sconce for bedroom and hallway",
        ),
        (
            4,
            "Electrical Wire (100m)",
            "wires",
            800.0,
            "Premium quality copper wiring cable",
        ),
        (
            5,
            "Power Adapter",
            "accessories",
            120.0,
            "Universal power adapter for various devices",
        ),
        (
            6,
            "Gold Pendant Light",
            "chandeliers",
            1800.0,
            "Stylish gold-finish pendant light fixture",
        ),
        (
            7,
            "Fiber Optic Cable",
            "wires",
            600.0,
            "High-speed fiber optic cable for networks",
        ),
        (
            8,
            "Light Switch",
            "accessories",
            85.0,
            "Modern minimalist light switch",
        ),
    ]
    .into_iter()
    .map(|(id, name, category, price, description)| Product {
        id,
        name: name.to_owned(),
        category: category.to_owned(),
        price,
        description: description.to_owned(),
    })
    .collect()
}
