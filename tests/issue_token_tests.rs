use chrono::Duration;
use hmac::{Hmac, Mac};
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde_json::{json, Value};
use sha2::Sha256;

use room_token::{issue_token, AccessClaims, TokenError};

fn decode_segment(segment: &str) -> Value {
    let bytes = base64::decode_config(segment, base64::URL_SAFE_NO_PAD).expect("segment is base64url");
    serde_json::from_slice(&bytes).expect("segment is json")
}

#[test]
fn end_to_end_claims_match_reference_payload() {
    let token = issue_token("test-room", "client-1", Duration::hours(24), b"secret", "devkey")
        .expect("token should be issued");

    let parts: Vec<&str> = token.split('.').collect();
    assert_eq!(parts.len(), 3);

    let header = decode_segment(parts[0]);
    assert_eq!(header["alg"], "HS256");
    assert_eq!(header["typ"], "JWT");

    let payload = decode_segment(parts[1]);
    assert_eq!(payload["sub"], "client-1");
    assert_eq!(payload["iss"], "devkey");
    assert_eq!(
        payload["video"],
        json!({"room": "test-room", "roomJoin": true, "canPublish": true, "canSubscribe": true})
    );
    assert!(payload.get("name").is_none());

    let exp = payload["exp"].as_i64().unwrap();
    let nbf = payload["nbf"].as_i64().unwrap();
    assert_eq!(exp - nbf, 86_400);
}

#[test]
fn signature_is_hmac_sha256_over_signing_input() {
    let token = issue_token("test-room", "client-1", Duration::hours(1), b"secret", "devkey").unwrap();
    let (signing_input, signature) = token.rsplit_once('.').unwrap();

    let mut mac = Hmac::<Sha256>::new_from_slice(b"secret").unwrap();
    mac.update(signing_input.as_bytes());
    let expected = base64::encode_config(mac.finalize().into_bytes(), base64::URL_SAFE_NO_PAD);

    assert_eq!(signature, expected);
}

#[test]
fn verification_succeeds_only_with_the_signing_key() {
    let token = issue_token("test-room", "client-2", Duration::hours(24), b"secret", "devkey").unwrap();
    assert_eq!(decode_header(&token).unwrap().alg, Algorithm::HS256);

    let validation = Validation::new(Algorithm::HS256);
    let data = decode::<AccessClaims>(&token, &DecodingKey::from_secret(b"secret"), &validation)
        .expect("same key verifies");
    assert_eq!(data.claims.sub, "client-2");
    assert_eq!(data.claims.video.room, "test-room");

    let others: [&[u8]; 3] = [b"Secret", b"secret ", b"another-secret"];
    for other in others {
        assert!(decode::<AccessClaims>(&token, &DecodingKey::from_secret(other), &validation).is_err());
    }
}

#[test]
fn empty_room_is_rejected() {
    let result = issue_token("", "alice", Duration::hours(24), b"secret", "iss");
    assert!(matches!(result, Err(TokenError::InvalidInput(_))));
}
