use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{CreateStaff, StaffMember, UpdateStaff, WorkStatus};
use crate::store::KeyValueStore;

use super::next_id;

const STAFF_KEY: &str = "flower_lighting_staff";

/// Staff roster CRUD; same shape as the catalog repository but without
/// default seeding.
pub struct StaffRepository {
    store: Arc<dyn KeyValueStore>,
}

impl StaffRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<StaffMember>> {
        if !self.store.is_available() {
            return Ok(Vec::new());
        }

        match self.store.get(STAFF_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn with_work_status(&self, status: WorkStatus) -> Result<Vec<StaffMember>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|s| s.work_status == status)
            .collect())
    }

    pub fn create(&self, member: CreateStaff) -> Result<StaffMember> {
        if !self.store.is_available() {
            return Err(Error::Unavailable);
        }

        let mut staff = self.list()?;
        let member = StaffMember {
            id: next_id(staff.iter().map(|s| s.id)),
            name: member.name,
            job_role: member.job_role,
            phone: member.phone,
            work_status: member.work_status,
        };
        staff.push(member.clone());
        self.persist(&staff)?;

        debug!(id = member.id, "staff member created");
        Ok(member)
    }

    /// Shallow merge: only the fields present in `changes` are replaced.
    pub fn update(&self, id: i64, changes: UpdateStaff) -> Result<StaffMember> {
        if !self.store.is_available() {
            return Err(Error::Unavailable);
        }

        let mut staff = self.list()?;
        let member = staff
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(Error::NotFound("staff member"))?;

        if let Some(name) = changes.name {
            member.name = name;
        }
        if let Some(job_role) = changes.job_role {
            member.job_role = job_role;
        }
        if let Some(phone) = changes.phone {
            member.phone = phone;
        }
        if let Some(work_status) = changes.work_status {
            member.work_status = work_status;
        }

        let updated = member.clone();
        self.persist(&staff)?;
        Ok(updated)
    }

    /// Deleting an id that is not present is a no-op, not an error.
    pub fn delete(&self, id: i64) -> Result<()> {
        if !self.store.is_available() {
            return Err(Error::Unavailable);
        }

        let staff: Vec<StaffMember> = self.list()?.into_iter().filter(|s| s.id != id).collect();
        self.persist(&staff)
    }

    fn persist(&self, staff: &[StaffMember]) -> Result<()> {
        self.store.set(STAFF_KEY, &serde_json::to_string(staff)?)
    }
}
