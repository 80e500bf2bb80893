// ABOUTME: Immutable in-memory model of shapes and their traits.
// ABOUTME: Shapes are indexed by trait at build time for presence queries.

mod shape;
mod traits;

pub use shape::{Shape, ShapeType};
pub use traits::{TraitId, TraitValue};

use crate::error::{Error, Result};
use crate::types::ShapeId;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// A validated collection of shapes. Built once through [`ModelBuilder`] and
/// read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Model {
    shapes: BTreeMap<ShapeId, Shape>,
    trait_index: HashMap<TraitId, BTreeSet<ShapeId>>,
}

impl Model {
    pub fn builder() -> ModelBuilder {
        ModelBuilder::default()
    }

    pub fn get_shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    /// All shapes, ordered by shape id.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes that carry `trait_id`, ordered by shape id.
    ///
    /// A trait no shape carries, including one the model has never seen,
    /// yields an empty result rather than an error.
    pub fn shapes_with_trait(&self, trait_id: &TraitId) -> Vec<&Shape> {
        self.trait_index
            .get(trait_id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.shapes.get(id))
            .collect()
    }
}

/// Collects shapes and assembles a [`Model`].
#[derive(Debug, Default)]
pub struct ModelBuilder {
    shapes: Vec<Shape>,
}

impl ModelBuilder {
    pub fn shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    pub fn shapes(mut self, shapes: impl IntoIterator<Item = Shape>) -> Self {
        self.shapes.extend(shapes);
        self
    }

    pub fn build(self) -> Result<Model> {
        let mut model = Model::default();

        for shape in self.shapes {
            if model.shapes.contains_key(shape.id()) {
                return Err(Error::DuplicateShape(shape.id().clone()));
            }

            for (trait_id, _) in shape.traits() {
                model
                    .trait_index
                    .entry(trait_id.clone())
                    .or_default()
                    .insert(shape.id().clone());
            }

            model.shapes.insert(shape.id().clone(), shape);
        }

        tracing::debug!(
            shapes = model.shapes.len(),
            traits = model.trait_index.len(),
            "built model"
        );

        Ok(model)
    }
}
