//! Derived views over the dataset.
//!
//! Both derivations are pure functions of the dataset passed to them, so
//! they can be recomputed freely. [`ViewCache`] layers memoization on top
//! without changing any answer.

use std::hash::{Hash as _, Hasher as _};

use menagerie_model::{Dataset, User};

use rustc_hash::{FxHashMap, FxHasher};

/// The maximum number of users listed per animal.
pub const TOP_USERS_PER_ANIMAL: usize = 10;

/// Lists every distinct animal loved by any user, in first-seen order.
///
/// Users are scanned in dataset order and each user's animals in listed
/// order; an animal appears once, at its first mention. Inactive users still
/// contribute their animals here.
pub fn animal_index(dataset: &Dataset) -> Vec<&str> {
    let mut animals: Vec<&str> = Vec::new();

    for user in dataset.iter() {
        for animal in &user.animals {
            if !animals.contains(&animal.as_str()) {
                animals.push(animal);
            }
        }
    }

    animals
}

/// Ranks the active lovers of an animal.
///
/// Keeps users that are active and whose animal list contains `animal` by
/// exact match, sorts them by points descending and truncates to
/// [`TOP_USERS_PER_ANIMAL`]. The sort is stable: users with equal points
/// keep their dataset order.
pub fn top_users_for_animal<'a>(dataset: &'a Dataset, animal: &str) -> Vec<&'a User> {
    top_positions(dataset, animal)
        .into_iter()
        .map(|i| &dataset[i])
        .collect()
}

/// Ranks the active lovers of an animal, as positions into the dataset.
fn top_positions(dataset: &Dataset, animal: &str) -> Vec<usize> {
    let mut positions: Vec<usize> = dataset
        .iter()
        .enumerate()
        .filter(|(_, user)| user.is_active && user.loves(animal))
        .map(|(i, _)| i)
        .collect();

    // positions start in ascending dataset order, so the stable sort keeps
    // that order among equal points
    positions.sort_by(|&a, &b| dataset[b].points.total_cmp(&dataset[a].points));
    positions.truncate(TOP_USERS_PER_ANIMAL);

    positions
}

/// Memoized derivations, keyed by a content fingerprint of the dataset.
///
/// The animal index is derived eagerly, per-animal rankings lazily on first
/// request. Handing the cache a dataset with a different fingerprint drops
/// every memoized answer. Cached answers are always identical to the
/// uncached derivations; the cache is an optimization, not a semantic.
#[derive(Clone, Debug)]
pub struct ViewCache {
    key: u64,
    animal_index: Vec<String>,
    rankings: FxHashMap<String, Vec<usize>>,
}

impl ViewCache {
    /// Creates a cache for the dataset.
    pub fn new(dataset: &Dataset) -> ViewCache {
        ViewCache {
            key: fingerprint(dataset),
            animal_index: owned_index(dataset),
            rankings: FxHashMap::default(),
        }
    }

    /// Checks that the cache was built from this dataset.
    pub fn covers(&self, dataset: &Dataset) -> bool {
        self.key == fingerprint(dataset)
    }

    /// The memoized animal index.
    pub fn animal_index(&mut self, dataset: &Dataset) -> &[String] {
        self.refresh(dataset);
        &self.animal_index
    }

    /// The memoized ranking for an animal.
    pub fn top_users<'a>(&mut self, dataset: &'a Dataset, animal: &str) -> Vec<&'a User> {
        self.refresh(dataset);

        self.rankings
            .entry(animal.to_string())
            .or_insert_with(|| top_positions(dataset, animal))
            .iter()
            .map(|&i| &dataset[i])
            .collect()
    }

    /// Drops every memoized answer if `dataset` is not the dataset the
    /// cache was built from.
    fn refresh(&mut self, dataset: &Dataset) {
        let key = fingerprint(dataset);

        if key != self.key {
            tracing::debug!(old = self.key, new = key, "dataset replaced, dropping views");

            self.key = key;
            self.animal_index = owned_index(dataset);
            self.rankings.clear();
        }
    }
}

fn owned_index(dataset: &Dataset) -> Vec<String> {
    animal_index(dataset).into_iter().map(String::from).collect()
}

/// Content fingerprint of a dataset, covering every field the derivations
/// read.
fn fingerprint(dataset: &Dataset) -> u64 {
    let mut hasher = FxHasher::default();

    for user in dataset.iter() {
        user.id.hash(&mut hasher);
        user.points.to_bits().hash(&mut hasher);
        user.animals.hash(&mut hasher);
        user.is_active.hash(&mut hasher);
    }

    hasher.finish()
}
