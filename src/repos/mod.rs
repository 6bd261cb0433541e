mod orders;
mod products;
mod reports;
mod session;
mod staff;

pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use reports::dashboard_summary;
pub use session::{SessionManager, StaffCredentials, DEFAULT_STAFF_EMAIL, DEFAULT_STAFF_PASSWORD};
pub use staff::StaffRepository;

/// Next identifier under the max+1 scheme. Deleting the highest id and adding
/// a new record reuses that id; this is not a monotonic counter.
pub(crate) fn next_id<I>(ids: I) -> i64
where
    I: Iterator<Item = i64>,
{
    ids.max().unwrap_or(0) + 1
}
