use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::error;

use crate::forms::FormError;
use crate::pages;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Unprocessable(String),
    Internal(String),
}

impl ApiError {
    pub(crate) fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub(crate) fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Unprocessable(msg)
            | ApiError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Unprocessable(msg)
            | ApiError::Internal(msg) => (status, msg).into_response(),
        }
    }
}

/// An error shown to a visitor as an HTML page rather than plain text.
#[derive(Debug)]
pub struct PageError(pub ApiError);

impl From<ApiError> for PageError {
    fn from(value: ApiError) -> Self {
        PageError(value)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let page = pages::error_page(status, self.0.message());
        (status, Html(page.into_string())).into_response()
    }
}

impl From<FormError> for ApiError {
    fn from(value: FormError) -> Self {
        match value {
            FormError::Missing(_) | FormError::Invalid(_) => {
                ApiError::Unprocessable(value.to_string())
            }
            FormError::Busy => ApiError::BadRequest(value.to_string()),
            FormError::Submit(err) => {
                error!("submission error: {err}");
                ApiError::Internal("We couldn't send your message. Please try again.".into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::SubmitError;

    #[test]
    fn test_form_errors_map_to_status() {
        let missing: ApiError = FormError::Missing("email").into();
        assert_eq!(missing.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let failed: ApiError = FormError::Submit(SubmitError::Unavailable).into();
        assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_page_error_renders_html() {
        let response = PageError(ApiError::NotFound("No such show".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let content_type = response.headers().get("content-type").unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }
}
