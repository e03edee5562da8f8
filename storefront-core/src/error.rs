use crate::catalog::ProductId;
use thiserror::Error;

/// Errors raised while building a [`Catalog`](crate::Catalog).
///
/// Cart and category operations never fail; only catalog construction can.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product id {0} in catalog")]
    DuplicateId(ProductId),
    #[error("product id must be positive (product '{title}')")]
    ZeroId { title: String },
}
