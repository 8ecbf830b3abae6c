//! Prefix detection and prefix-code reduction over term lists
//!
//! A list is a prefix code if no term is the prefix of another term. Lists
//! meant for typing with auto-completion benefit from this property: once a
//! term is complete, no other term can be meant.

/// Whether `a` is a (proper) prefix of `b`.
pub fn is_prefix(a: &str, b: &str) -> bool {
    a != b && b.starts_with(a)
}

fn sorted_refs<S: AsRef<str>>(terms: &[S], is_sorted: bool) -> Vec<&str> {
    let mut elems: Vec<&str> = terms.iter().map(|t| t.as_ref()).collect();
    if !is_sorted {
        elems.sort_unstable();
    }
    elems
}

/// Tell whether `terms` form a prefix code.
///
/// Equal terms count as prefixes of each other. With `is_sorted` the
/// input is trusted to be sorted; results for unsorted input are
/// undefined then.
pub fn is_prefix_code<S: AsRef<str>>(terms: &[S], is_sorted: bool) -> bool {
    sorted_refs(terms, is_sorted)
        .windows(2)
        .all(|pair| !pair[1].starts_with(pair[0]))
}

/// All `(prefix, prefixed)` pairs in `terms`.
///
/// A term prefixing several others yields one pair per prefixed term:
/// `["a", "aa", "ab"]` gives `("a", "aa")` and `("a", "ab")`.
pub fn matching_prefixes<S: AsRef<str>>(terms: &[S], is_sorted: bool) -> Vec<(String, String)> {
    let elems = sorted_refs(terms, is_sorted);
    let mut pairs = Vec::new();
    for (idx, prefix) in elems.iter().enumerate() {
        if prefix.is_empty() {
            continue;
        }
        // in sorted order, everything `prefix` prefixes follows it directly
        for other in elems[idx + 1..].iter().take_while(|t| t.starts_with(prefix)) {
            pairs.push((prefix.to_string(), other.to_string()));
        }
    }
    pairs
}

/// A term together with the terms it is a prefix of.
///
/// Children are prefixed by their parent, and may be parents of further
/// prefixed terms themselves: `a` → `aa` → `aaa`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixNode {
    pub term: String,
    pub children: Vec<PrefixNode>,
}

impl PrefixNode {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(term: impl Into<String>, children: Vec<PrefixNode>) -> Self {
        Self {
            term: term.into(),
            children,
        }
    }
}

fn close_top(stack: &mut Vec<PrefixNode>, roots: &mut Vec<PrefixNode>) {
    if let Some(node) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => roots.push(node),
        }
    }
}

/// Build the prefix forest of the sorted list `terms`.
///
/// ```text
/// ["a", "b", "c"]                  -> a, b, c
/// ["a", "aa", "ab"]                -> a(aa, ab)
/// ["a", "aa", "b", "ba", "baa"]    -> a(aa), b(ba(baa))
/// ```
pub fn build_prefix_tree<S: AsRef<str>>(terms: &[S]) -> Vec<PrefixNode> {
    let mut roots = Vec::new();
    let mut stack: Vec<PrefixNode> = Vec::new();

    for term in terms.iter().map(|t| t.as_ref()) {
        while stack
            .last()
            .map_or(false, |top| !term.starts_with(top.term.as_str()))
        {
            close_top(&mut stack, &mut roots);
        }
        stack.push(PrefixNode::new(term));
    }
    while !stack.is_empty() {
        close_top(&mut stack, &mut roots);
    }
    roots
}

/// Turn a prefix forest back into a list that is a prefix code.
///
/// With `prefer_short` every node contributes only its own term. Otherwise
/// a node with children is replaced by the flattened leaves below it.
pub fn flatten_prefix_tree(nodes: &[PrefixNode], prefer_short: bool) -> Vec<String> {
    let mut result = Vec::new();
    for node in nodes {
        if prefer_short || node.children.is_empty() {
            result.push(node.term.clone());
        } else {
            result.extend(flatten_prefix_tree(&node.children, false));
        }
    }
    result
}

/// Strip terms from `terms` until the rest is a prefix code.
///
/// With `prefer_short` a prefix survives and the terms it prefixes are
/// dropped; otherwise the longest terms survive. The input is left
/// untouched and the result is sorted.
pub fn strip_matching_prefixes<S: AsRef<str>>(
    terms: &[S],
    is_sorted: bool,
    prefer_short: bool,
) -> Vec<String> {
    let elems = sorted_refs(terms, is_sorted);
    let tree = build_prefix_tree(&elems);
    let result = flatten_prefix_tree(&tree, prefer_short);
    tracing::debug!(
        before = elems.len(),
        after = result.len(),
        prefer_short,
        "Stripped matching prefixes"
    );
    result
}
