//! Endpoint arrangement: group by first path segment, then sort each group.
//!
//! Groups keep the order in which their first member was seen, so top-level
//! resources that appear first in the model stay first. Only the order
//! *within* a top-level resource changes.
//!
//! ```text
//! /b/2  /a/2  /a/1  /b/1   →   /b/1  /b/2  /a/1  /a/2
//! └ b ┘ └ a ┘                  └─ b group ┘ └─ a group ┘
//! ```

use std::collections::HashMap;

/// The grouping key of a path: the text between its first and second `/`.
///
/// Paths with no second segment (`""`, `"/"`, `"users"`) share the `""` key.
pub fn group_key(path: &str) -> &str {
    path.split('/').nth(1).unwrap_or("")
}

/// Rearrange endpoints by first path segment.
///
/// `path_of` extracts an endpoint's full path; a missing path sorts and groups
/// as `""`. Within a group the sort is stable and compares paths by code
/// point, so endpoints with identical paths keep their input order.
pub fn arrange<T, F>(endpoints: Vec<T>, path_of: F) -> Vec<T>
where
    F: Fn(&T) -> Option<&str>,
{
    if endpoints.len() <= 1 {
        return endpoints;
    }

    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<T>> = Vec::new();
    for endpoint in endpoints {
        let key = group_key(path_of(&endpoint).unwrap_or_default()).to_string();
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(endpoint);
    }

    groups
        .into_iter()
        .flat_map(|mut group| {
            // `sort_by` is a stable merge sort.
            group.sort_by(|a, b| {
                path_of(a)
                    .unwrap_or_default()
                    .cmp(path_of(b).unwrap_or_default())
            });
            group
        })
        .collect()
}

// --- tests -------------------------------------------------------------------
