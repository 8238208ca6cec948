//! Dependency graph over tool names.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{DescriptorError, GlobalConfig};

/// Directed graph where an edge `a -> b` means tool `a` depends on tool `b`.
///
/// Nodes are tool names borrowed from the descriptor set; every edge target
/// must itself be a node, which validation guarantees before the graph is
/// built.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph<'a> {
    edges: BTreeMap<&'a str, Vec<&'a str>>,
}

impl<'a> DependencyGraph<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph of a validated configuration.
    pub fn from_config(config: &'a GlobalConfig) -> Self {
        let mut graph = Self::new();
        for (name, tool) in &config.tools {
            graph.add_node(name.as_str(), tool.depends_on.iter().map(|d| d.as_str()));
        }
        graph
    }

    /// Add a node with its ordered dependencies.
    pub fn add_node<I>(&mut self, name: &'a str, depends_on: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.edges.insert(name, depends_on.into_iter().collect());
    }

    /// Reject any cycle, including a tool depending on itself.
    ///
    /// Depth-first search with a recursion stack, visiting nodes in name
    /// order. The error carries the cycle path, e.g. `a -> b -> a`.
    pub fn check_acyclic(&self) -> Result<(), DescriptorError> {
        let mut done: BTreeSet<&str> = BTreeSet::new();
        let mut stack: Vec<&str> = Vec::new();

        for &name in self.edges.keys() {
            self.visit(name, &mut done, &mut stack)?;
        }
        Ok(())
    }

    fn visit(
        &self,
        name: &'a str,
        done: &mut BTreeSet<&'a str>,
        stack: &mut Vec<&'a str>,
    ) -> Result<(), DescriptorError> {
        if done.contains(name) {
            return Ok(());
        }

        if let Some(start) = stack.iter().position(|&n| n == name) {
            let mut cycle: Vec<&str> = stack[start..].to_vec();
            cycle.push(name);
            return Err(DescriptorError::CircularDependency(cycle.join(" -> ")));
        }

        stack.push(name);
        for &dep in self.edges.get(name).map(Vec::as_slice).unwrap_or_default() {
            self.visit(dep, done, stack)?;
        }
        stack.pop();
        done.insert(name);

        Ok(())
    }

    /// Order nodes so every tool comes after all of its dependencies.
    ///
    /// Kahn's algorithm; among the tools that are ready at any point the
    /// lexicographically smallest goes first, so the order is a pure function
    /// of the graph.
    pub fn emission_order(&self) -> Result<Vec<&'a str>, DescriptorError> {
        let mut in_degree: BTreeMap<&str, usize> = BTreeMap::new();
        let mut dependents: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

        for (&name, deps) in &self.edges {
            in_degree.insert(name, deps.len());
            for &dep in deps {
                dependents.entry(dep).or_default().push(name);
            }
        }

        let mut ready: BTreeSet<&str> =
            in_degree.iter().filter(|&(_, deg)| *deg == 0).map(|(&name, _)| name).collect();
        let mut order = Vec::with_capacity(in_degree.len());

        while let Some(current) = ready.pop_first() {
            order.push(current);
            for &dependent in dependents.get(current).map(Vec::as_slice).unwrap_or_default() {
                if let Some(deg) = in_degree.get_mut(dependent) {
                    *deg -= 1;
                    if *deg == 0 {
                        ready.insert(dependent);
                    }
                }
            }
        }

        if order.len() != in_degree.len() {
            let remaining: Vec<_> = in_degree
                .iter()
                .filter(|&(_, deg)| *deg > 0)
                .map(|(name, _)| name.to_string())
                .collect();
            return Err(DescriptorError::CircularDependency(remaining.join(", ")));
        }

        Ok(order)
    }
}
