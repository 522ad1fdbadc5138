// thaipron/core/src/trie.rs
//
// Prefix trie keyed by characters, used for exception lookups.

use std::collections::HashMap;

/// A character trie mapping whole keys to values.
///
/// The exception dictionary stores one entry per spelling pattern here and
/// asks for the longest pattern starting at a text position.
///
/// # Example
/// ```
/// use thaipron_core::trie::TrieNode;
///
/// let mut trie = TrieNode::new();
/// trie.insert("กา", 1);
/// trie.insert("การ", 2);
///
/// assert_eq!(trie.get("กา"), Some(&1));
/// assert_eq!(trie.get("ก"), None);
///
/// let input: Vec<char> = "การบ้าน".chars().collect();
/// let prefixes = trie.walk_prefixes(&input, 0);
/// assert_eq!(prefixes.len(), 2);
/// assert_eq!(prefixes[1], (3, &2));
/// ```
#[derive(Debug, Clone)]
pub struct TrieNode<V> {
    children: HashMap<char, Box<TrieNode<V>>>,
    value: Option<V>,
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TrieNode<V> {
    /// Create a new empty trie root.
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
            value: None,
        }
    }

    /// Insert a key, returning the value it replaced.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        let mut node = self;
        for ch in key.chars() {
            node = node
                .children
                .entry(ch)
                .or_insert_with(|| Box::new(TrieNode::new()));
        }
        node.value.replace(value)
    }

    /// Value stored for exactly `key`, if any. Prefixes of stored keys
    /// do not match.
    pub fn get(&self, key: &str) -> Option<&V> {
        let mut node = self;
        for ch in key.chars() {
            node = node.children.get(&ch)?;
        }
        node.value.as_ref()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }

    /// Walk the trie starting at a position in `input` and return all
    /// stored keys that match there.
    ///
    /// # Returns
    /// `(end_index, value)` pairs, `end_index` exclusive, in order of
    /// increasing length.
    pub fn walk_prefixes<'a>(&'a self, input: &[char], start: usize) -> Vec<(usize, &'a V)> {
        let mut res = Vec::new();
        let mut node = self;
        let mut idx = start;
        while idx < input.len() {
            match node.children.get(&input[idx]) {
                Some(child) => {
                    node = child;
                    idx += 1;
                    if let Some(v) = &node.value {
                        res.push((idx, v));
                    }
                }
                None => break,
            }
        }
        res
    }

    /// Longest stored key starting at `start`.
    pub fn longest_prefix<'a>(&'a self, input: &[char], start: usize) -> Option<(usize, &'a V)> {
        self.walk_prefixes(input, start).pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_insert_and_get() {
        let mut trie = TrieNode::new();
        trie.insert("สา", 'a');
        trie.insert("สามารถ", 'b');

        assert_eq!(trie.get("สา"), Some(&'a'));
        assert_eq!(trie.get("สามารถ"), Some(&'b'));
        assert!(!trie.contains_key("สาม"));
        assert!(!trie.contains_key("ส"));
    }

    #[test]
    fn test_insert_replaces() {
        let mut trie = TrieNode::new();
        assert_eq!(trie.insert("ปรา", 1), None);
        assert_eq!(trie.insert("ปรา", 2), Some(1));
        assert_eq!(trie.get("ปรา"), Some(&2));
    }

    #[test]
    fn test_walk_prefixes_multiple_matches() {
        let mut trie = TrieNode::new();
        trie.insert("ก", 1);
        trie.insert("กา", 2);
        trie.insert("การ", 3);

        let input: Vec<char> = "การบ้าน".chars().collect();
        let prefixes = trie.walk_prefixes(&input, 0);
        assert_eq!(prefixes, vec![(1, &1), (2, &2), (3, &3)]);
        assert_eq!(trie.longest_prefix(&input, 0), Some((3, &3)));
    }

    #[test]
    fn test_walk_prefixes_offset_and_miss() {
        let mut trie = TrieNode::new();
        trie.insert("บ้าน", ());

        let input: Vec<char> = "การบ้าน".chars().collect();
        assert!(trie.walk_prefixes(&input, 0).is_empty());
        assert_eq!(trie.longest_prefix(&input, 3), Some((7, &())));
        assert!(trie.longest_prefix(&input, 7).is_none());
    }

    #[test]
    fn test_empty() {
        let trie: TrieNode<u8> = TrieNode::default();
        assert!(trie.is_empty());
    }
}
