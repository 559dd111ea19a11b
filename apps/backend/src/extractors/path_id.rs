use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Parse a named path segment as a positive row id.
pub fn param_id(req: &HttpRequest, name: &str) -> Result<i32, AppError> {
    let raw = req.match_info().get(name).ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidId, format!("Missing {name} parameter"))
    })?;
    parse_id(raw)
}

pub fn parse_id(raw: &str) -> Result<i32, AppError> {
    let id = raw
        .parse::<i32>()
        .map_err(|_| AppError::bad_request(ErrorCode::InvalidId, format!("Invalid id: {raw}")))?;

    if id <= 0 {
        return Err(AppError::bad_request(
            ErrorCode::InvalidId,
            format!("Id must be positive, got: {id}"),
        ));
    }
    Ok(id)
}

/// The `{id}` segment of the matched route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub i32);

impl FromRequest for PathId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(param_id(req, "id").map(PathId))
    }
}
