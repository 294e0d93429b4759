use crate::request::Response;

/// The response as it crosses the handler ABI (`handler_response_t`).
///
/// Holds no pointers, so the caller owns it outright once written.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status: u32,
}

impl From<Response> for HandlerResponse {
    fn from(response: Response) -> Self {
        HandlerResponse {
            status: response.status,
        }
    }
}

impl From<HandlerResponse> for Response {
    fn from(raw: HandlerResponse) -> Self {
        Response { status: raw.status }
    }
}
