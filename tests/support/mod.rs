// ABOUTME: Test support utilities.
// ABOUTME: Provides tracing setup and shape builders for integration tests.

use std::sync::Once;
use traitlint::types::ShapeId;
use traitlint::{Model, Shape, ShapeType, TraitId};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env().add_directive("traitlint=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

#[allow(dead_code)]
pub fn shape_id(value: &str) -> ShapeId {
    ShapeId::new(value).unwrap()
}

/// A structure shape annotated with each of `traits`.
#[allow(dead_code)]
pub fn structure(id: &str, traits: &[TraitId]) -> Shape {
    traits
        .iter()
        .cloned()
        .fold(Shape::new(shape_id(id), ShapeType::Structure), Shape::annotate)
}

#[allow(dead_code)]
pub fn model(shapes: impl IntoIterator<Item = Shape>) -> Model {
    Model::builder().shapes(shapes).build().unwrap()
}
