use super::types::Student;

use dashmap::DashMap;

/// In-memory student table keyed by roll number.
///
/// Every single operation is synchronized by the underlying `DashMap`, but
/// nothing here makes a sequence of calls atomic.
#[derive(Default)]
pub struct StudentStore {
    records: DashMap<i32, Student>,
}

impl StudentStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    pub fn list_all(&self) -> Vec<Student> {
        self.records
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn find(&self, id: i32) -> Option<Student> {
        self.records.get(&id).map(|entry| entry.value().clone())
    }

    /// Inserts the record, replacing whatever was stored under the same key.
    pub fn save(&self, student: Student) {
        self.records.insert(student.roll_no, student);
    }

    pub fn delete(&self, id: i32) {
        self.records.remove(&id);
    }

    pub fn exists(&self, id: i32) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
