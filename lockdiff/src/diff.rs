use crate::model::{entry_version, PackageLock};

/// One per-package difference between two lockfile revisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added {
        package: String,
    },
    Removed {
        package: String,
    },
    Version {
        package: String,
        old: String,
        new: String,
    },
}

/// Shallow diff of two lockfiles. Removed and version-changed packages come
/// out in `old`'s key order, added packages are appended in `new`'s key
/// order. The "" key is npm's root project entry and is skipped on both
/// sides. Only the version field is compared.
pub fn diff(old: &PackageLock, new: &PackageLock) -> Vec<Change> {
    let mut changes: Vec<Change> = Vec::new();

    for (key, old_entry) in old.packages.iter() {
        if key.is_empty() {
            continue;
        }
        match new.packages.get(key) {
            None => changes.push(Change::Removed {
                package: key.clone(),
            }),
            Some(new_entry) => {
                let old_version = entry_version(old_entry);
                let new_version = entry_version(new_entry);
                if old_version != new_version {
                    changes.push(Change::Version {
                        package: key.clone(),
                        old: old_version.to_string(),
                        new: new_version.to_string(),
                    });
                }
            }
        }
    }

    // Check for new packages
    for key in new.packages.keys() {
        if key.is_empty() || old.packages.contains_key(key) {
            continue;
        }
        changes.push(Change::Added {
            package: key.clone(),
        });
    }

    changes
}

/// Renders the change list as a commit message: header, blank line, one
/// bullet per change.
pub fn commit_message(prefix: &str, changes: &[Change]) -> String {
    let mut message = format!("{}: Update packages\n\n", prefix);

    for change in changes.iter() {
        match change {
            Change::Added { package } => {
                message.push_str(&format!("* {} was added\n", package));
            }
            Change::Removed { package } => {
                message.push_str(&format!("* {} was removed\n", package));
            }
            Change::Version { package, old, new } => {
                message.push_str(&format!("* {}: {} => {}\n", package, old, new));
            }
        }
    }

    message
}
