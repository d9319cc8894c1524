//! Dataset container and validation.

use std::collections::HashSet;

use derive_more::{Deref, Display, Error};

use serde::Deserialize;

use super::User;

/// An immutable, ordered collection of [`User`] records.
///
/// Construction checks the one structural invariant the blog owns: user ids
/// are unique across the dataset. Everything else about the records is
/// trusted as validated by the asset's producer. The collection never
/// changes during a render.
#[derive(Clone, Debug, Default, Deref, Deserialize, PartialEq)]
#[serde(try_from = "Vec<User>")]
pub struct Dataset(Vec<User>);

impl Dataset {
    /// Builds a dataset from records in their external order.
    ///
    /// Returns [`DuplicateUserId`] if two records share an id.
    pub fn new(users: Vec<User>) -> Result<Dataset, DuplicateUserId> {
        match duplicate_id(&users) {
            Some(id) => Err(DuplicateUserId(id)),
            None => Ok(Dataset(users)),
        }
    }
}

/// Finds the first id shared by two records.
fn duplicate_id(users: &[User]) -> Option<String> {
    let mut seen = HashSet::with_capacity(users.len());

    users
        .iter()
        .find(|user| !seen.insert(user.id.as_str()))
        .map(|user| user.id.clone())
}

impl TryFrom<Vec<User>> for Dataset {
    type Error = DuplicateUserId;

    fn try_from(users: Vec<User>) -> Result<Self, Self::Error> {
        Dataset::new(users)
    }
}

/// Two records share the same id.
#[derive(Clone, Debug, Display, Error)]
#[display("duplicate user id \"{_0}\"")]
pub struct DuplicateUserId(#[error(not(source))] String);

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Name;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: Name {
                given: "Test".to_string(),
                surname: id.to_string(),
            },
            points: 0.0,
            animals: vec!["cat".to_string()],
            is_active: true,
            age: 30,
        }
    }

    #[test]
    fn keeps_records_in_external_order() {
        let dataset = Dataset::new(vec![user("b"), user("a"), user("c")]).unwrap();

        let ids: Vec<&str> = dataset.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Dataset::new(vec![user("a"), user("b"), user("a")]).unwrap_err();

        assert_eq!(err.to_string(), "duplicate user id \"a\"");
    }

    #[test]
    fn empty_dataset_is_fine() {
        let dataset = Dataset::new(Vec::new()).unwrap();

        assert!(dataset.is_empty());
    }
}
