use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::cart::errors::CartError;
use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_item::{
    RemoveCartItemParams, RemoveCartItemUseCase,
};
use business::domain::cart::use_cases::update_item::{
    UpdateCartItemParams, UpdateCartItemUseCase,
};
use business::domain::shared::value_objects::{Language, SessionId};

use crate::api::cart::dto::{AddCartItemRequest, CartResponse, UpdateCartItemRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::language::{parse_language, parse_session_id};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    update_item_use_case: Arc<dyn UpdateCartItemUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        update_item_use_case: Arc<dyn UpdateCartItemUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_item_use_case,
            update_item_use_case,
            remove_item_use_case,
            clear_use_case,
        }
    }

    /// Priced view of the cart after a read or a mutation.
    async fn summary(&self, session_id: SessionId, language: Language) -> CartApiResponse {
        match self
            .get_use_case
            .execute(GetCartParams {
                session_id,
                language,
            })
            .await
        {
            Ok(summary) => CartApiResponse::Ok(Json(summary.into())),
            Err(err) => CartApiResponse::from_error(err.into_error_response()),
        }
    }
}

fn parse_quantity(raw: i64) -> Result<u8, CartError> {
    u8::try_from(raw).map_err(|_| CartError::InvalidQuantity)
}

fn parse_scope(
    session_id: &str,
    lang: Option<&str>,
) -> Result<(SessionId, Language), Json<ErrorResponse>> {
    Ok((parse_session_id(session_id)?, parse_language(lang)?))
}

/// Cart API
///
/// One cart per widget session. Every response carries the priced cart in
/// the requested catalog language.
#[OpenApi]
impl CartApi {
    /// Get the cart
    #[oai(path = "/cart/:session_id", method = "get", tag = "ApiTags::Cart")]
    async fn get(
        &self,
        session_id: Path<String>,
        /// Catalog language used for pricing (default: en)
        lang: Query<Option<String>>,
    ) -> CartApiResponse {
        match parse_scope(&session_id.0, lang.0.as_deref()) {
            Ok((session_id, language)) => self.summary(session_id, language).await,
            Err(json) => CartApiResponse::BadRequest(json),
        }
    }

    /// Add an item
    ///
    /// Adding an item already in the cart increases its quantity, capped at 10.
    #[oai(path = "/cart/:session_id/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(
        &self,
        session_id: Path<String>,
        lang: Query<Option<String>>,
        body: Json<AddCartItemRequest>,
    ) -> CartApiResponse {
        let (session_id, language) = match parse_scope(&session_id.0, lang.0.as_deref()) {
            Ok(scope) => scope,
            Err(json) => return CartApiResponse::BadRequest(json),
        };
        let quantity = match parse_quantity(body.0.quantity.unwrap_or(1)) {
            Ok(quantity) => quantity,
            Err(err) => return CartApiResponse::from_error(err.into_error_response()),
        };

        let params = AddCartItemParams {
            session_id: session_id.clone(),
            language,
            item_id: body.0.item_id,
            quantity,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(_) => self.summary(session_id, language).await,
            Err(err) => CartApiResponse::from_error(err.into_error_response()),
        }
    }

    /// Set an item's quantity
    #[oai(
        path = "/cart/:session_id/items/:item_id",
        method = "put",
        tag = "ApiTags::Cart"
    )]
    async fn update_item(
        &self,
        session_id: Path<String>,
        item_id: Path<String>,
        lang: Query<Option<String>>,
        body: Json<UpdateCartItemRequest>,
    ) -> CartApiResponse {
        let (session_id, language) = match parse_scope(&session_id.0, lang.0.as_deref()) {
            Ok(scope) => scope,
            Err(json) => return CartApiResponse::BadRequest(json),
        };
        let quantity = match parse_quantity(body.0.quantity) {
            Ok(quantity) => quantity,
            Err(err) => return CartApiResponse::from_error(err.into_error_response()),
        };

        let params = UpdateCartItemParams {
            session_id: session_id.clone(),
            item_id: item_id.0,
            quantity,
        };

        match self.update_item_use_case.execute(params).await {
            Ok(_) => self.summary(session_id, language).await,
            Err(err) => CartApiResponse::from_error(err.into_error_response()),
        }
    }

    /// Remove an item
    #[oai(
        path = "/cart/:session_id/items/:item_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove_item(
        &self,
        session_id: Path<String>,
        item_id: Path<String>,
        lang: Query<Option<String>>,
    ) -> CartApiResponse {
        let (session_id, language) = match parse_scope(&session_id.0, lang.0.as_deref()) {
            Ok(scope) => scope,
            Err(json) => return CartApiResponse::BadRequest(json),
        };

        let params = RemoveCartItemParams {
            session_id: session_id.clone(),
            item_id: item_id.0,
        };

        match self.remove_item_use_case.execute(params).await {
            Ok(_) => self.summary(session_id, language).await,
            Err(err) => CartApiResponse::from_error(err.into_error_response()),
        }
    }

    /// Empty the cart
    #[oai(path = "/cart/:session_id", method = "delete", tag = "ApiTags::Cart")]
    async fn clear(&self, session_id: Path<String>) -> ClearCartResponse {
        let session_id = match parse_session_id(&session_id.0) {
            Ok(id) => id,
            Err(json) => return ClearCartResponse::BadRequest(json),
        };

        match self
            .clear_use_case
            .execute(ClearCartParams { session_id })
            .await
        {
            Ok(()) => ClearCartResponse::NoContent,
            Err(err) => {
                let (_, json) = err.into_error_response();
                ClearCartResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartApiResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartApiResponse {
    fn from_error((status, json): (StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => CartApiResponse::BadRequest(json),
            404 => CartApiResponse::NotFound(json),
            409 => CartApiResponse::Conflict(json),
            _ => CartApiResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_out_of_range_quantity_before_use_case() {
        assert!(matches!(parse_quantity(-1), Err(CartError::InvalidQuantity)));
        assert!(matches!(parse_quantity(300), Err(CartError::InvalidQuantity)));
        assert_eq!(parse_quantity(3).unwrap(), 3);
    }
}
