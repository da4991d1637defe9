//! Data access trait for hobby records.
//!
//! The `HobbyStore` trait defines a read-only interface for retrieving the
//! hobbies currently flagged active. The engine never writes back; create,
//! update, and delete belong to the owning application layer.

use crate::Hobby;

/// Read-only access to the user's active hobbies.
///
/// Implementations decide where records live (browser storage, a database,
/// a fixture). The engine only ever iterates the active set.
///
/// # Examples
///
/// ```rust
/// use fairweather_core::{Hobby, HobbyStore};
///
/// struct MemoryStore {
///     hobbies: Vec<Hobby>,
/// }
///
/// impl HobbyStore for MemoryStore {
///     fn active_hobbies(&self) -> Box<dyn Iterator<Item = Hobby> + Send + '_> {
///         Box::new(
///             self.hobbies
///                 .iter()
///                 .filter(|hobby| hobby.is_active)
///                 .cloned(),
///         )
///     }
/// }
///
/// let store = MemoryStore {
///     hobbies: vec![
///         Hobby::new(1, "cycling"),
///         Hobby::new(2, "archery").with_active(false),
///     ],
/// };
/// let names: Vec<_> = store.active_hobbies().map(|h| h.name).collect();
/// assert_eq!(names, vec!["cycling"]);
/// ```
pub trait HobbyStore {
    /// Return all hobbies currently flagged active.
    fn active_hobbies(&self) -> Box<dyn Iterator<Item = Hobby> + Send + '_>;
}
