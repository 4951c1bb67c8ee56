//! Serialization Tests
//!
//! Decoded records are forwarded to the dispatch layer in serialized form.

use cachewire::protocol::{decode_heartbeat_response, decode_requests, decode_response};
use cachewire::protocol::HeartbeatResponse;
use cachewire::{Request, Response, ResponseType};

#[test]
fn test_decoded_requests_survive_bincode() {
    let buffer = "*3\r\n$3\r\nSET\r\n$3\r\nfoo\r\n$3\r\nbar\r\n2\t\n*1\r\n$7\r\nCOMMAND\r\nabc";
    let requests = decode_requests(buffer.as_bytes()).unwrap();

    let bytes = bincode::serialize(&requests).unwrap();
    let recovered: Vec<Request> = bincode::deserialize(&bytes).unwrap();

    assert_eq!(recovered, requests);
    assert!(!recovered[1].has_key());
}

#[test]
fn test_decoded_responses_survive_bincode() {
    for buffer in [&b"$-1\r\n"[..], &b"+OK\r\n\t\nreq-1"[..], &b"*0\r\n"[..]] {
        let response = decode_response(buffer).unwrap();

        let bytes = bincode::serialize(&response).unwrap();
        let recovered: Response = bincode::deserialize(&bytes).unwrap();

        assert_eq!(recovered, response);
        assert_eq!(recovered.is_null(), response.is_null());
        assert_eq!(recovered.is_decoded(), response.is_decoded());
    }
}

#[test]
fn test_response_type_keeps_variant() {
    let bytes = bincode::serialize(&ResponseType::Integer).unwrap();
    let recovered: ResponseType = bincode::deserialize(&bytes).unwrap();
    assert_eq!(recovered, ResponseType::Integer);
    assert_eq!(recovered.marker(), ':');
}

#[test]
fn test_heartbeat_response_keeps_missing_next_server() {
    let heartbeat = decode_heartbeat_response(b"").unwrap();

    let bytes = bincode::serialize(&heartbeat).unwrap();
    let recovered: HeartbeatResponse = bincode::deserialize(&bytes).unwrap();

    assert_eq!(recovered, heartbeat);
    assert_eq!(recovered.next_server, None);
}
