use std::collections::HashSet;

use crate::follower_table_util::{load_username_set, AuditError};

/// Accounts in `following` with no entry in `followers`. Pure set
/// difference, unordered; ordering is imposed by the caller.
pub fn subtract_followers(
    following: &HashSet<String>,
    followers: &HashSet<String>,
) -> HashSet<String> {
    following.difference(followers).cloned().collect()
}

/// Loads both tables, subtracts, and sorts lexicographically ascending.
/// The result is always a subset of the following table's usernames.
pub fn find_nonfollowers(
    followers_path: &str,
    following_path: &str,
) -> Result<Vec<String>, AuditError> {
    let followers = load_username_set(followers_path)?;
    let following = load_username_set(following_path)?;
    let mut nonfollowers: Vec<String> =
        Vec::from_iter(subtract_followers(&following, &followers));
    nonfollowers.sort();
    Ok(nonfollowers)
}
