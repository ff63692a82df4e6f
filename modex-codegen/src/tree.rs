//! The namespace tree built from flat path lists.

use indexmap::IndexMap;
use modex_manifest::IndexOptions;

use crate::entry::ModuleEntry;

/// A node in the namespace tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Leaf binding a module name to a require reference.
    Alias(String),
    /// Named group of further nodes.
    Namespace(Namespace),
}

/// Insertion-ordered mapping of child name to node.
///
/// Children keep first-insertion order, so pre-sorted input paths yield
/// deterministic output without any sorting here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Namespace {
    children: IndexMap<String, Node>,
}

impl Namespace {
    /// Iterate children in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Look up a child by exact name.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the namespace has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn insert_entry(&mut self, dirs: &[String], name: &str, reference: String, options: &IndexOptions) {
        match dirs.split_first() {
            None => {
                self.children.insert(name.to_string(), Node::Alias(reference));
            }
            // A skipped directory contributes no namespace; the rest of
            // the path continues against this same level.
            Some((segment, rest)) if options.skips_segment(segment) => {
                self.insert_entry(rest, name, reference, options);
            }
            Some((segment, rest)) => {
                let child = self
                    .children
                    .entry(segment.clone())
                    .or_insert_with(|| Node::Namespace(Namespace::default()));
                if let Node::Namespace(namespace) = child {
                    namespace.insert_entry(rest, name, reference, options);
                }
                // An Alias already bound to this name is a caller
                // precondition violation; the new binding is dropped.
            }
        }
    }

    fn count_leaves(&self) -> usize {
        self.children
            .values()
            .map(|node| match node {
                Node::Alias(_) => 1,
                Node::Namespace(namespace) => namespace.count_leaves(),
            })
            .sum()
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<(&'a str, &'a str)>) {
        for (name, node) in self.iter() {
            match node {
                Node::Alias(reference) => out.push((name, reference)),
                Node::Namespace(namespace) => namespace.collect_leaves(out),
            }
        }
    }
}

/// The rooted namespace tree for one index target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleTree {
    root: Namespace,
}

impl ModuleTree {
    /// Build a tree from an ordered sequence of relative file paths.
    ///
    /// Paths must arrive in the order the output should list them; the
    /// builder performs no sorting of its own. Within one level a name
    /// may be bound as either a module or a namespace, never both; path
    /// sets violating that are a caller error and the conflicting
    /// binding is dropped.
    pub fn build<I, S>(paths: I, options: &IndexOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::default();
        for path in paths {
            let entry = ModuleEntry::resolve(path.as_ref(), options);
            tree.root
                .insert_entry(&entry.dirs, &entry.name, entry.reference, options);
        }
        tree
    }

    /// The root namespace.
    pub fn root(&self) -> &Namespace {
        &self.root
    }

    /// Whether the tree holds no modules at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Number of module bindings across the whole tree.
    pub fn leaf_count(&self) -> usize {
        self.root.count_leaves()
    }

    /// All (name, reference) bindings in tree order, ignoring nesting.
    pub fn leaves(&self) -> Vec<(&str, &str)> {
        let mut out = Vec::new();
        self.root.collect_leaves(&mut out);
        out
    }
}
