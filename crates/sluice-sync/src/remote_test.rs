use super::*;
use std::io::ErrorKind;
use suppaftp::types::Response;

fn response(status: Status) -> FtpError {
    FtpError::UnexpectedResponse(Response {
        status,
        body: b"550 mkd".to_vec(),
    })
}

#[test]
fn test_existing_directory_response_is_tolerated() {
    assert!(is_already_exists(&response(Status::FileUnavailable)));
}

#[test]
fn test_other_server_responses_are_not_tolerated() {
    assert!(!is_already_exists(&response(Status::NotLoggedIn)));
    assert!(!is_already_exists(&response(Status::BadCommand)));
}

#[test]
fn test_transport_errors_are_not_tolerated() {
    let err = FtpError::ConnectionError(std::io::Error::new(
        ErrorKind::BrokenPipe,
        "connection reset",
    ));
    assert!(!is_already_exists(&err));
}
