use super::PackageName;
use crate::shared::{DepgraphError, GraphResult};
use indexmap::IndexMap;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A directed "from declares an immediate dependency on to" edge
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyEdge {
    pub from: PackageName,
    pub to: PackageName,
}

impl DependencyEdge {
    pub fn new(from: PackageName, to: PackageName) -> Self {
        Self { from, to }
    }

    #[cfg(test)]
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for DependencyEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// DependencyGraph aggregate: a root package plus the adjacency list of every
/// package reachable from it.
///
/// Keys keep the order in which packages were first visited, and each
/// adjacency list keeps the order reported by the dependency source. The
/// graph may contain cycles and is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGraph {
    root: PackageName,
    adjacency: IndexMap<PackageName, Vec<PackageName>>,
}

impl DependencyGraph {
    pub fn new(root: PackageName, adjacency: IndexMap<PackageName, Vec<PackageName>>) -> Self {
        Self { root, adjacency }
    }

    pub fn root(&self) -> &PackageName {
        &self.root
    }

    /// Packages in first-visited order
    pub fn packages(&self) -> impl Iterator<Item = &PackageName> {
        self.adjacency.keys()
    }

    /// `(package, immediate dependencies)` pairs in first-visited order
    pub fn adjacency(&self) -> impl Iterator<Item = (&PackageName, &[PackageName])> {
        self.adjacency
            .iter()
            .map(|(name, deps)| (name, deps.as_slice()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Immediate dependencies of `name`, exactly as reported by the source
    pub fn direct_dependencies(&self, name: &str) -> GraphResult<&[PackageName]> {
        self.adjacency
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| DepgraphError::not_found(name))
    }

    /// Every package whose adjacency list contains `name`
    ///
    /// `name` must itself be a key of the graph; a name that only appears as
    /// somebody's dependency but was never visited yields `NotFound`.
    pub fn reverse_dependencies(&self, name: &str) -> GraphResult<BTreeSet<PackageName>> {
        if !self.contains(name) {
            return Err(DepgraphError::not_found(name));
        }

        Ok(self
            .adjacency
            .iter()
            .filter(|(_, deps)| deps.iter().any(|dep| dep == name))
            .map(|(key, _)| key.clone())
            .collect())
    }

    /// Reverse-dependency index for every key, recomputed from the adjacency
    pub fn reverse_index(&self) -> BTreeMap<PackageName, BTreeSet<PackageName>> {
        let mut index: BTreeMap<PackageName, BTreeSet<PackageName>> = self
            .adjacency
            .keys()
            .map(|key| (key.clone(), BTreeSet::new()))
            .collect();

        for (from, deps) in &self.adjacency {
            for dep in deps {
                if let Some(dependents) = index.get_mut(dep) {
                    dependents.insert(from.clone());
                }
            }
        }

        index
    }

    /// All edges in traversal order
    pub fn edges(&self) -> impl Iterator<Item = DependencyEdge> + '_ {
        self.adjacency.iter().flat_map(|(from, deps)| {
            deps.iter()
                .map(move |to| DependencyEdge::new(from.clone(), to.clone()))
        })
    }

    pub fn package_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|v| v.len()).sum()
    }
}
