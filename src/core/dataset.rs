use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::location::Location;
use crate::core::types::DatasetKind;

/// Stable handle to a dataset inside a [`ProvenanceGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetId(pub usize);

impl std::fmt::Display for DatasetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Dataset {0} does not exist in this graph")]
    UnknownDataset(DatasetId),

    #[error("Adding {parent} as a parent of {child} would create a cycle")]
    Cycle { child: DatasetId, parent: DatasetId },
}

/// A node of the provenance graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub location: Location,
    pub kind: DatasetKind,

    /// Datasets this one was derived from, in discovery order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    parents: Vec<DatasetId>,
}

impl Dataset {
    #[must_use]
    pub fn new(kind: DatasetKind, location: impl Into<Location>) -> Self {
        Self {
            location: location.into(),
            kind,
            parents: Vec::new(),
        }
    }

    #[must_use]
    pub fn parents(&self) -> &[DatasetId] {
        &self.parents
    }
}

/// Arena of datasets with "derived from" edges.
///
/// Datasets are never removed and edges are append-only, so ids stay valid
/// for the life of the graph. Every edge insertion is checked so the graph
/// remains acyclic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvenanceGraph {
    datasets: Vec<Dataset>,
}

impl ProvenanceGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dataset and return its id
    pub fn insert(&mut self, dataset: Dataset) -> DatasetId {
        let id = DatasetId(self.datasets.len());
        self.datasets.push(dataset);
        id
    }

    #[must_use]
    pub fn get(&self, id: DatasetId) -> Option<&Dataset> {
        self.datasets.get(id.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DatasetId, &Dataset)> {
        self.datasets
            .iter()
            .enumerate()
            .map(|(i, d)| (DatasetId(i), d))
    }

    /// Record that `child` was derived from `parent`
    ///
    /// # Errors
    ///
    /// Returns `GraphError::UnknownDataset` if either id is not in this graph,
    /// or `GraphError::Cycle` if `child` is already an ancestor of `parent`.
    pub fn add_parent(&mut self, child: DatasetId, parent: DatasetId) -> Result<(), GraphError> {
        if self.get(child).is_none() {
            return Err(GraphError::UnknownDataset(child));
        }
        if self.get(parent).is_none() {
            return Err(GraphError::UnknownDataset(parent));
        }
        if child == parent || self.is_ancestor(child, parent) {
            return Err(GraphError::Cycle { child, parent });
        }

        self.datasets[child.0].parents.push(parent);
        Ok(())
    }

    /// Whether `ancestor` is reachable from `id` by following parent edges
    #[must_use]
    pub fn is_ancestor(&self, ancestor: DatasetId, id: DatasetId) -> bool {
        let mut stack = vec![id];
        let mut seen = vec![false; self.datasets.len()];

        while let Some(current) = stack.pop() {
            let Some(dataset) = self.get(current) else {
                continue;
            };
            for &parent in &dataset.parents {
                if parent == ancestor {
                    return true;
                }
                if !seen[parent.0] {
                    seen[parent.0] = true;
                    stack.push(parent);
                }
            }
        }

        false
    }

    /// Parent datasets of `id`, in discovery order
    pub fn parents_of(&self, id: DatasetId) -> impl Iterator<Item = &Dataset> {
        self.get(id)
            .map(Dataset::parents)
            .unwrap_or_default()
            .iter()
            .filter_map(move |&p| self.get(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::location::{DatabaseLocation, FileLocation};

    fn local(kind: DatasetKind, path: &str) -> Dataset {
        Dataset::new(kind, FileLocation::local(path))
    }

    #[test]
    fn test_insert_and_get() {
        let mut graph = ProvenanceGraph::new();
        let id = graph.insert(local(DatasetKind::ComparativeModel, "model.pdb"));

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.get(id).unwrap().kind, DatasetKind::ComparativeModel);
        assert!(graph.get(DatasetId(5)).is_none());
    }

    #[test]
    fn test_add_parent_preserves_order() {
        let mut graph = ProvenanceGraph::new();
        let model = graph.insert(local(DatasetKind::ComparativeModel, "model.pdb"));
        let t1 = graph.insert(Dataset::new(
            DatasetKind::ExperimentalStructure,
            DatabaseLocation::pdb("2ABC"),
        ));
        let t2 = graph.insert(Dataset::new(
            DatasetKind::ExperimentalStructure,
            DatabaseLocation::pdb("1XYZ"),
        ));

        graph.add_parent(model, t1).unwrap();
        graph.add_parent(model, t2).unwrap();

        assert_eq!(graph.get(model).unwrap().parents(), &[t1, t2]);
        let accessions: Vec<String> = graph
            .parents_of(model)
            .map(|d| d.location.to_string())
            .collect();
        assert_eq!(accessions, vec!["PDB:2ABC", "PDB:1XYZ"]);
    }

    #[test]
    fn test_self_parent_rejected() {
        let mut graph = ProvenanceGraph::new();
        let a = graph.insert(local(DatasetKind::ComparativeModel, "a.pdb"));

        assert_eq!(
            graph.add_parent(a, a),
            Err(GraphError::Cycle { child: a, parent: a })
        );
    }

    #[test]
    fn test_indirect_cycle_rejected() {
        let mut graph = ProvenanceGraph::new();
        let a = graph.insert(local(DatasetKind::ComparativeModel, "a.pdb"));
        let b = graph.insert(local(DatasetKind::ComparativeModel, "b.pdb"));
        let c = graph.insert(local(DatasetKind::ExperimentalStructure, "c.pdb"));

        graph.add_parent(a, b).unwrap();
        graph.add_parent(b, c).unwrap();

        assert!(graph.is_ancestor(c, a));
        assert!(matches!(
            graph.add_parent(c, a),
            Err(GraphError::Cycle { .. })
        ));
        // Rejected edge leaves the graph untouched
        assert!(graph.get(c).unwrap().parents().is_empty());
    }

    #[test]
    fn test_unknown_dataset_rejected() {
        let mut graph = ProvenanceGraph::new();
        let a = graph.insert(local(DatasetKind::ComparativeModel, "a.pdb"));

        assert_eq!(
            graph.add_parent(a, DatasetId(3)),
            Err(GraphError::UnknownDataset(DatasetId(3)))
        );
    }
}
