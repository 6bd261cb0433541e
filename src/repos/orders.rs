use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{CreateOrder, Order, OrderStatus};
use crate::store::KeyValueStore;

const ORDERS_KEY: &str = "flower_lighting_orders";

/// Customer order CRUD. Unlike the catalog there is no default seeding.
pub struct OrderRepository {
    store: Arc<dyn KeyValueStore>,
}

impl OrderRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<Order>> {
        if !self.store.is_available() {
            return Ok(Vec::new());
        }

        match self.store.get(ORDERS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Order>> {
        Ok(self.list()?.into_iter().find(|o| o.id == id))
    }

    pub fn with_status(&self, status: OrderStatus) -> Result<Vec<Order>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|o| o.status == status)
            .collect())
    }

    /// Appends a new order with repository-assigned identity, timestamp, and
    /// an initial `pending` status.
    ///
    /// The id is the creation time in milliseconds; two orders created within
    /// the same millisecond share an id.
    pub fn create(&self, order: CreateOrder) -> Result<Order> {
        if !self.store.is_available() {
            return Err(Error::Unavailable);
        }

        let mut orders = self.list()?;
        let now = Utc::now();
        let order = Order {
            id: now.timestamp_millis().to_string(),
            name: order.name,
            phone: order.phone,
            item: order.item,
            quantity: order.quantity,
            delivery_type: order.delivery_type,
            status: OrderStatus::Pending,
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        orders.push(order.clone());
        self.persist(&orders)?;

        debug!(id = %order.id, "order created");
        Ok(order)
    }

    pub fn update_status(&self, id: &str, status: OrderStatus) -> Result<Order> {
        if !self.store.is_available() {
            return Err(Error::Unavailable);
        }

        let mut orders = self.list()?;
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(Error::NotFound("order"))?;
        order.status = status;

        let updated = order.clone();
        self.persist(&orders)?;
        Ok(updated)
    }

    /// Deleting an id that is not present is a no-op, not an error.
    pub fn delete(&self, id: &str) -> Result<()> {
        if !self.store.is_available() {
            return Err(Error::Unavailable);
        }

        let orders: Vec<Order> = self.list()?.into_iter().filter(|o| o.id != id).collect();
        self.persist(&orders)
    }

    fn persist(&self, orders: &[Order]) -> Result<()> {
        self.store.set(ORDERS_KEY, &serde_json::to_string(orders)?)
    }
}
