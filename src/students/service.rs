use super::error::{Result, StudentError};
use super::store::StudentStore;
use super::types::Student;

use std::sync::Arc;

pub const MIN_PERCENTAGE: f32 = 0.0;
pub const MAX_PERCENTAGE: f32 = 100.0;

/// Business layer on top of [`StudentStore`].
///
/// Holds the store by handle; whoever builds the service decides how long
/// the data lives.
pub struct StudentService {
    store: Arc<StudentStore>,
}

impl StudentService {
    pub fn new(store: Arc<StudentStore>) -> Arc<Self> {
        Arc::new(Self { store })
    }

    pub fn list_all(&self) -> Vec<Student> {
        tracing::info!("Fetching all students ({} stored)", self.store.len());
        self.store.list_all()
    }

    pub fn get_by_id(&self, id: i32) -> Result<Student> {
        tracing::info!("Fetching student with ID: {}", id);
        self.store.find(id).ok_or(StudentError::NotFound(id))
    }

    /// Stores the record as given. The percentage range is not checked here.
    pub fn add(&self, student: Student) {
        tracing::info!("Adding student: {:?}", student);
        self.store.save(student);
    }

    /// Replaces name, percentage and branch of an existing record.
    ///
    /// The roll number in `new_data` is ignored; the key never changes.
    /// Absence is reported before an out-of-range percentage.
    pub fn update(&self, id: i32, new_data: Student) -> Result<Student> {
        let mut existing = self.store.find(id).ok_or(StudentError::NotFound(id))?;

        if !is_valid_percentage(new_data.percentage) {
            return Err(StudentError::InvalidRange);
        }

        existing.apply_update(new_data);
        self.store.save(existing.clone());
        tracing::info!("Updated student with ID: {}", id);
        Ok(existing)
    }

    pub fn delete(&self, id: i32) -> Result<()> {
        if !self.store.exists(id) {
            return Err(StudentError::NotFound(id));
        }
        self.store.delete(id);
        tracing::info!("Deleted student with ID: {}", id);
        Ok(())
    }
}

/// NaN fails both comparisons and is rejected.
pub fn is_valid_percentage(percentage: f32) -> bool {
    (MIN_PERCENTAGE..=MAX_PERCENTAGE).contains(&percentage)
}
