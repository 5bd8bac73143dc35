//! Path-keyed hierarchies of datasets.

use std::collections::BTreeMap;

use prep_common::PrepResult;

use crate::attrs::Attrs;
use crate::dataset::Dataset;

/// A hierarchical collection of datasets keyed by `/`-separated path
/// segments (e.g. `/historical/CCSM4/tas`).
///
/// Built once per job, consumed once, then discarded; only merge/concat of
/// leaf datasets happens after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTree {
    pub name: Option<String>,
    nodes: BTreeMap<String, Dataset>,
    pub attrs: Attrs,
}

/// Normalize a node path to `/a/b/c` form.
fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    format!("/{}", trimmed)
}

impl DataTree {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            nodes: BTreeMap::new(),
            attrs: Attrs::new(),
        }
    }

    /// Build from (path, dataset) pairs.
    pub fn from_entries(
        name: Option<String>,
        entries: impl IntoIterator<Item = (String, Dataset)>,
    ) -> Self {
        let mut tree = Self::new(name);
        for (path, ds) in entries {
            tree.insert(&path, ds);
        }
        tree
    }

    pub fn insert(&mut self, path: &str, ds: Dataset) {
        self.nodes.insert(normalize_path(path), ds);
    }

    pub fn get(&self, path: &str) -> Option<&Dataset> {
        self.nodes.get(&normalize_path(path))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate leaves in path order.
    pub fn leaves(&self) -> impl Iterator<Item = (&String, &Dataset)> {
        self.nodes.iter()
    }

    /// First-level child names, in order.
    pub fn child_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .nodes
            .keys()
            .filter_map(|p| p.trim_start_matches('/').split('/').next())
            .map(String::from)
            .collect();
        names.dedup();
        names
    }

    /// Leaves under a first-level child, keyed by their remaining path.
    pub fn children_of(&self, child: &str) -> Vec<(String, &Dataset)> {
        let prefix = format!("/{}/", child.trim_matches('/'));
        self.nodes
            .iter()
            .filter_map(|(path, ds)| {
                path.strip_prefix(&prefix)
                    .map(|rest| (rest.to_string(), ds))
            })
            .collect()
    }

    /// Apply a fallible transform to every leaf, keeping paths.
    pub fn map_over_datasets(
        &self,
        mut f: impl FnMut(&Dataset) -> PrepResult<Dataset>,
    ) -> PrepResult<DataTree> {
        let mut out = DataTree::new(self.name.clone());
        out.attrs = self.attrs.clone();
        for (path, ds) in &self.nodes {
            out.nodes.insert(path.clone(), f(ds)?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_normalization() {
        let mut tree = DataTree::new(Some("cmip5".to_string()));
        tree.insert("historical/CCSM4/tas", Dataset::new());
        assert!(tree.get("/historical/CCSM4/tas").is_some());
        assert!(tree.get("historical/CCSM4/tas/").is_some());
    }

    #[test]
    fn test_children_of() {
        let mut tree = DataTree::new(None);
        tree.insert("/historical/CCSM4/tas", Dataset::new());
        tree.insert("/rcp45/CCSM4/tas", Dataset::new());
        tree.insert("/rcp45/pattern1/tas", Dataset::new());

        assert_eq!(tree.child_names(), vec!["historical", "rcp45"]);
        let rcp45 = tree.children_of("rcp45");
        assert_eq!(rcp45.len(), 2);
        assert_eq!(rcp45[0].0, "CCSM4/tas");
        assert_eq!(rcp45[1].0, "pattern1/tas");
    }

    #[test]
    fn test_map_over_datasets_keeps_paths() {
        let mut tree = DataTree::new(None);
        tree.insert("/a/b", Dataset::new());
        let mapped = tree
            .map_over_datasets(|ds| {
                let mut ds = ds.clone();
                ds.attrs.insert("touched", true);
                Ok(ds)
            })
            .unwrap();
        assert!(mapped.get("/a/b").unwrap().attrs.get("touched").is_some());
    }
}
