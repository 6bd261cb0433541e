use serde::{Deserialize, Serialize};

// Stored records keep the camelCase field names and lowercase enum tags the
// web storefront wrote, so existing collections deserialize unchanged.

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
}

/// Partial update; only the provided fields change.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryType {
    Delivery,
    Pickup,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub item: String,
    pub quantity: u32,
    pub delivery_type: DeliveryType,
    pub status: OrderStatus,
    pub created_at: String,
}

/// Caller-supplied order fields. Identity, status, and creation time are
/// assigned by the repository and cannot be provided here.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    pub name: String,
    pub phone: String,
    pub item: String,
    pub quantity: u32,
    pub delivery_type: DeliveryType,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    Active,
    Inactive,
    OnLeave,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: i64,
    pub name: String,
    pub job_role: String,
    pub phone: String,
    pub work_status: WorkStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateStaff {
    pub name: String,
    pub job_role: String,
    pub phone: String,
    pub work_status: WorkStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStaff {
    pub name: Option<String>,
    pub job_role: Option<String>,
    pub phone: Option<String>,
    pub work_status: Option<WorkStatus>,
}

/// Singleton session marker; its presence under the session key is the whole
/// logged-in signal.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StaffSession {
    pub email: String,
    pub logged_in_at: String,
}

/// Aggregate counts backing the staff dashboard overview.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_orders: usize,
    pub pending_orders: usize,
    pub processing_orders: usize,
    pub completed_orders: usize,
    pub total_staff: usize,
    pub active_staff: usize,
    pub inactive_staff: usize,
    pub on_leave_staff: usize,
}
