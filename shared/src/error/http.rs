//! HTTP status mapping for the error vocabulary

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// HTTP status the server answers with for this code.
    ///
    /// Anything not singled out here is a client mistake and gets 400.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::NotFound | Self::MemberNotFound => StatusCode::NOT_FOUND,

            Self::AlreadyExists | Self::DuplicateEmail | Self::PhotoAlreadyExists => {
                StatusCode::CONFLICT
            }

            Self::SessionRequired => StatusCode::UNAUTHORIZED,

            Self::FileTooLarge => StatusCode::PAYLOAD_TOO_LARGE,

            Self::InternalError | Self::LookupFailed | Self::PersistFailed | Self::UploadFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for_every_code_family() {
        let cases = [
            (ErrorCode::Success, StatusCode::OK),
            (ErrorCode::NotFound, StatusCode::NOT_FOUND),
            (ErrorCode::MemberNotFound, StatusCode::NOT_FOUND),
            (ErrorCode::AlreadyExists, StatusCode::CONFLICT),
            (ErrorCode::DuplicateEmail, StatusCode::CONFLICT),
            (ErrorCode::PhotoAlreadyExists, StatusCode::CONFLICT),
            (ErrorCode::SessionRequired, StatusCode::UNAUTHORIZED),
            (ErrorCode::FileTooLarge, StatusCode::PAYLOAD_TOO_LARGE),
            (ErrorCode::InternalError, StatusCode::INTERNAL_SERVER_ERROR),
            (ErrorCode::LookupFailed, StatusCode::INTERNAL_SERVER_ERROR),
            (ErrorCode::PersistFailed, StatusCode::INTERNAL_SERVER_ERROR),
            (ErrorCode::UploadFailed, StatusCode::INTERNAL_SERVER_ERROR),
            (ErrorCode::ValidationFailed, StatusCode::BAD_REQUEST),
            (ErrorCode::InvalidRequest, StatusCode::BAD_REQUEST),
            (ErrorCode::UnsupportedFileFormat, StatusCode::BAD_REQUEST),
            (ErrorCode::EmptyFile, StatusCode::BAD_REQUEST),
        ];
        for (code, expected) in cases {
            assert_eq!(code.http_status(), expected, "{code:?}");
        }
    }
}
