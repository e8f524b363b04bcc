use serde::{Deserialize, Deserializer, Serialize};

/// A single student record, keyed by its roll number.
///
/// Fields missing from an incoming JSON body, or sent as `null`, fall back
/// to their defaults, so an update body may leave out `rollNo` entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Student {
    /// Unique identifier, used as the store key.
    #[serde(deserialize_with = "null_as_default")]
    pub roll_no: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Expected to lie in `[0, 100]`; only enforced on update.
    #[serde(deserialize_with = "null_as_default")]
    pub percentage: f32,
    #[serde(deserialize_with = "null_as_default")]
    pub branch: String,
}

impl Student {
    pub fn new(roll_no: i32, name: &str, percentage: f32, branch: &str) -> Self {
        Self {
            roll_no,
            name: name.to_string(),
            percentage,
            branch: branch.to_string(),
        }
    }

    /// Overwrites every field except the key with the values from `other`.
    pub fn apply_update(&mut self, other: Student) {
        self.name = other.name;
        self.percentage = other.percentage;
        self.branch = other.branch;
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
