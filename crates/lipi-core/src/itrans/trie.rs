use std::collections::HashMap;

struct Node {
    children: HashMap<u8, Node>,
    value: Option<usize>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            value: None,
        }
    }
}

/// Byte trie from ITRANS spellings to token indices.
pub struct SpellingTrie {
    root: Node,
    max_len: usize,
}

impl SpellingTrie {
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            max_len: 0,
        }
    }

    pub fn insert(&mut self, spelling: &str, value: usize) {
        let mut node = &mut self.root;
        for &b in spelling.as_bytes() {
            node = node.children.entry(b).or_insert_with(Node::new);
        }
        node.value = Some(value);
        self.max_len = self.max_len.max(spelling.len());
    }

    /// Byte length of the longest inserted spelling.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Longest spelling that prefixes `input`, as `(byte_len, value)`.
    pub fn longest_match(&self, input: &str) -> Option<(usize, usize)> {
        let mut node = &self.root;
        let mut best = None;
        for (i, b) in input.bytes().enumerate() {
            match node.children.get(&b) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(v) = node.value {
                best = Some((i + 1, v));
            }
        }
        best
    }
}

impl Default for SpellingTrie {
    fn default() -> Self {
        Self::new()
    }
}
