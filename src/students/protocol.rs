//! Student HTTP Protocol
//!
//! Route paths and the fixed plain-text bodies returned on success.
//! Records themselves travel as JSON [`Student`](super::types::Student) objects.

// --- API Endpoints ---

/// Collection endpoint for creating a record.
pub const ENDPOINT_STUDENT: &str = "/student";
/// Item endpoint for reading, updating and deleting by roll number.
pub const ENDPOINT_STUDENT_BY_ID: &str = "/student/:id";
/// Listing of every stored record.
pub const ENDPOINT_STUDENTS: &str = "/students";

// --- Response Messages ---

pub const MSG_STUDENT_ADDED: &str = "Student added successfully!";
pub const MSG_STUDENT_DELETED: &str = "Student deleted successfully.";
