//! Prefix trie used to attach routes to their nearest ancestor.
//!
//! Ids are inserted longest first. When a shorter id arrives it claims (and
//! removes) every stored id below it, so each id is claimed exactly once and
//! always by its closest ancestor.

use std::collections::BTreeMap;

use crate::error::{Result, RouteError};

#[derive(Debug, Default)]
struct Node {
    terminal: bool,
    children: BTreeMap<char, Node>,
}

/// Insert / claim-by-prefix structure over route ids
#[derive(Debug, Default)]
pub struct PrefixTrie {
    root: Node,
}

impl PrefixTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value`
    ///
    /// # Errors
    ///
    /// [`RouteError::EmptyRouteId`] for an empty value.
    pub fn add(&mut self, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(RouteError::EmptyRouteId);
        }

        let node = value
            .chars()
            .fold(&mut self.root, |node, c| node.children.entry(c).or_default());
        node.terminal = true;
        Ok(())
    }

    /// Removes and returns every stored value that starts with `prefix` and
    /// passes `filter`
    ///
    /// Values failing the filter stay in the trie. Results come back in
    /// character order.
    ///
    /// ```
    /// use rhtmx_flat_routes::PrefixTrie;
    ///
    /// let mut trie = PrefixTrie::new();
    /// trie.add("users.$id").unwrap();
    /// trie.add("users2").unwrap();
    ///
    /// let claimed = trie.find_and_remove("users", |v| v[5..].starts_with('.'));
    /// assert_eq!(claimed, vec!["users.$id"]);
    /// assert!(trie.find_and_remove("users", |_| true) == vec!["users2"]);
    /// ```
    pub fn find_and_remove<F>(&mut self, prefix: &str, filter: F) -> Vec<String>
    where
        F: Fn(&str) -> bool,
    {
        let mut node = &mut self.root;
        for c in prefix.chars() {
            match node.children.get_mut(&c) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }

        let mut found = Vec::new();
        let mut current = prefix.to_string();
        collect_and_remove(node, &mut current, &filter, &mut found);
        found
    }
}

fn collect_and_remove<F>(node: &mut Node, current: &mut String, filter: &F, found: &mut Vec<String>)
where
    F: Fn(&str) -> bool,
{
    if node.terminal && filter(current) {
        node.terminal = false;
        found.push(current.clone());
    }

    for (c, child) in node.children.iter_mut() {
        current.push(*c);
        collect_and_remove(child, current, filter, found);
        current.pop();
    }
}
