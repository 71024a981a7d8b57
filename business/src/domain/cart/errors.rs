#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.item_not_found")]
    NotFound,
    #[error("cart.full")]
    Full,
    #[error("cart.unknown_item")]
    UnknownItem,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
