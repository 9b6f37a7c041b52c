// Domain layer: core models and static reference tables. No external dependencies beyond std/serde.

pub mod constants;
pub mod model;
