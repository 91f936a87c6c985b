//! API error responses.
//!
//! Every failure body has the same shape: `{"success": false, "message"}`.
//! Validation failures are 400, missing resources 404, everything else a
//! generic 500 with the detail kept in the server log.

use salvo::{
    async_trait, http::StatusCode, oapi, oapi::EndpointOutRegister, oapi::ToSchema, prelude::Json,
    Depot, Request, Response, Writer,
};
use serde::Serialize;

#[derive(Debug, Serialize, ToSchema)]
struct ErrorBody {
    success: bool,
    message: String,
}

/// An error ready to be written as a JSON response.
#[derive(Debug)]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub(crate) fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal Server Error".to_string(),
        }
    }
}

#[async_trait]
impl Writer for ApiError {
    async fn write(mut self, _req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(ErrorBody {
            success: false,
            message: self.message,
        }));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut oapi::Components, operation: &mut oapi::Operation) {
        operation.responses.insert(
            StatusCode::BAD_REQUEST.as_str(),
            oapi::Response::new("Validation failure")
                .add_content("application/json", ErrorBody::to_schema(components)),
        );
        operation.responses.insert(
            StatusCode::NOT_FOUND.as_str(),
            oapi::Response::new("Resource not found")
                .add_content("application/json", ErrorBody::to_schema(components)),
        );
        operation.responses.insert(
            StatusCode::INTERNAL_SERVER_ERROR.as_str(),
            oapi::Response::new("Internal server error")
                .add_content("application/json", ErrorBody::to_schema(components)),
        );
    }
}
