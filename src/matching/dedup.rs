//! Set-semantics merging of value lists

use std::collections::HashSet;
use std::hash::Hash;

/// Append the items of `incoming` that are not already in `target`.
///
/// Equality is structural. The first occurrence wins and keeps its position;
/// later duplicates, including duplicates within `incoming`, are dropped.
///
/// # Example
///
/// ```rust
/// use relation2dbml::matching::add_unique;
///
/// let mut names = vec!["users".to_string()];
/// add_unique(&mut names, ["orders".to_string(), "users".to_string()]);
/// assert_eq!(names, vec!["users", "orders"]);
/// ```
pub fn add_unique<T, I>(target: &mut Vec<T>, incoming: I)
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen: HashSet<T> = target.iter().cloned().collect();
    for item in incoming {
        if seen.insert(item.clone()) {
            target.push(item);
        }
    }
}
