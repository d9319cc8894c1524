//! User data models.

use serde::{Deserialize, Serialize};

/// A single user record.
///
/// Records come from an external dataset asset and are never mutated at
/// runtime. The asset keeps its original camelCase field names.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The unique, opaque identifier of the user.
    pub id: String,
    /// The user's structured name.
    pub name: Name,
    /// The user's score, used only for ranking.
    pub points: f64,
    /// The animals this user loves, in listed order.
    ///
    /// May contain duplicates within one user; treated as a set.
    pub animals: Vec<String>,
    /// Whether the user is active.
    ///
    /// Inactive users never appear in per-animal rankings, but the animals
    /// they love still count toward the animal index.
    pub is_active: bool,
    /// The user's age. Present in the data, consumed by no behavior.
    pub age: u32,
}

impl User {
    /// Checks if the user loves an animal.
    ///
    /// Animal names match by exact string equality: case-sensitive, no
    /// trimming.
    pub fn loves(&self, animal: &str) -> bool {
        self.animals.iter().any(|a| a == animal)
    }

    /// The user's full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.given, self.name.surname)
    }
}

/// A user's structured name.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Name {
    /// The user's given name.
    pub given: String,
    /// The user's surname.
    pub surname: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_record() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "u-1",
                "name": { "given": "Ada", "surname": "Lovelace" },
                "points": 9,
                "animals": ["cat", "dog"],
                "isActive": true,
                "age": 36
            }"#,
        )
        .unwrap();

        assert_eq!(user.id, "u-1");
        assert_eq!(user.full_name(), "Ada Lovelace");
        assert_eq!(user.points, 9.0);
        assert!(user.is_active);
    }

    #[test]
    fn loves_matches_exactly() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "u-1",
                "name": { "given": "Ada", "surname": "Lovelace" },
                "points": 9,
                "animals": ["cat"],
                "isActive": true,
                "age": 36
            }"#,
        )
        .unwrap();

        assert!(user.loves("cat"));
        assert!(!user.loves("Cat"));
        assert!(!user.loves("cat "));
    }
}
