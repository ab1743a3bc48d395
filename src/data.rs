// src/data.rs

use crate::catalog::{Catalog, CatalogError};

const CATALOG_YAML: &str = include_str!("data/catalog.yaml");

/// Carga y valida el catálogo embebido en el binario.
pub fn read_catalog_embedded() -> Result<Catalog, CatalogError> {
    Catalog::from_yaml(CATALOG_YAML)
}
