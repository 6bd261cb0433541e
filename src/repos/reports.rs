use crate::error::Result;
use crate::models::{DashboardSummary, OrderStatus, WorkStatus};

use super::{OrderRepository, StaffRepository};

/// Business overview for the staff dashboard: order volume by status and
/// roster size by work status, derived from full collection reads.
pub fn dashboard_summary(
    orders: &OrderRepository,
    staff: &StaffRepository,
) -> Result<DashboardSummary> {
    let orders = orders.list()?;
    let staff = staff.list()?;

    let orders_with = |status: OrderStatus| orders.iter().filter(|o| o.status == status).count();
    let staff_with = |status: WorkStatus| staff.iter().filter(|s| s.work_status == status).count();

    Ok(DashboardSummary {
        total_orders: orders.len(),
        pending_orders: orders_with(OrderStatus::Pending),
        processing_orders: orders_with(OrderStatus::Processing),
        completed_orders: orders_with(OrderStatus::Completed),
        total_staff: staff.len(),
        active_staff: staff_with(WorkStatus::Active),
        inactive_staff: staff_with(WorkStatus::Inactive),
        on_leave_staff: staff_with(WorkStatus::OnLeave),
    })
}
