use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::dataset::{Dataset, DatasetId, GraphError, ProvenanceGraph};
use crate::core::helix::HelixRecord;
use crate::core::template::Template;
use crate::core::types::SoftwareVersion;

/// Everything recovered from one input file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractionResult {
    /// All datasets discovered in the file, with their parent edges
    pub graph: ProvenanceGraph,

    /// The dataset describing the file itself
    pub dataset: Option<DatasetId>,

    /// Comparative-modeling templates, sorted by model residue range
    pub templates: Vec<Template>,

    /// Modeling packages named in the header, keyed by lowercase name
    pub software: BTreeMap<String, SoftwareVersion>,

    /// Raw secondary-structure records from official PDB headers
    pub metadata: Vec<HelixRecord>,
}

impl ExtractionResult {
    /// The root dataset, if extraction produced one
    #[must_use]
    pub fn root(&self) -> Option<&Dataset> {
        self.dataset.and_then(|id| self.graph.get(id))
    }

    #[must_use]
    pub fn dataset(&self, id: DatasetId) -> Option<&Dataset> {
        self.graph.get(id)
    }
}

/// Accumulates an [`ExtractionResult`] across extraction stages.
///
/// Each stage takes the builder by value and hands it back, so there is
/// exactly one owner of the partial result at any time.
#[derive(Debug, Default)]
pub struct ResultBuilder {
    result: ExtractionResult,
}

impl ResultBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dataset to the graph without making it the root
    pub fn add_dataset(&mut self, dataset: Dataset) -> DatasetId {
        self.result.graph.insert(dataset)
    }

    /// Add a dataset and make it the root of the result
    pub fn set_root(&mut self, dataset: Dataset) -> DatasetId {
        let id = self.add_dataset(dataset);
        self.result.dataset = Some(id);
        id
    }

    /// # Errors
    ///
    /// Propagates `GraphError` if the edge is invalid or would create a cycle.
    pub fn add_parent(&mut self, child: DatasetId, parent: DatasetId) -> Result<(), GraphError> {
        self.result.graph.add_parent(child, parent)
    }

    /// Mutable access to the graph for stages that discover many parents
    pub fn graph_mut(&mut self) -> &mut ProvenanceGraph {
        &mut self.result.graph
    }

    #[must_use]
    pub fn software(mut self, name: impl Into<String>, version: SoftwareVersion) -> Self {
        self.result.software.insert(name.into(), version);
        self
    }

    #[must_use]
    pub fn templates(mut self, templates: Vec<Template>) -> Self {
        self.result.templates = templates;
        self
    }

    #[must_use]
    pub fn metadata(mut self, metadata: Vec<HelixRecord>) -> Self {
        self.result.metadata = metadata;
        self
    }

    #[must_use]
    pub fn build(self) -> ExtractionResult {
        self.result
    }
}
