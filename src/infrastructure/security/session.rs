// src/infrastructure/security/session.rs
use crate::application::{
    dto::{IssuedSession, SessionClaims},
    error::{ApplicationError, ApplicationResult},
    ports::security::SessionCodec,
};
use crate::domain::user::UserId;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::Duration;

type HmacSha256 = Hmac<Sha256>;

/// Stateless session tokens: `base64url(claims JSON) . base64url(HMAC-SHA256)`.
/// Everything needed to verify a session travels in the cookie itself.
#[derive(Clone)]
pub struct HmacSessionCodec {
    key: Vec<u8>,
    ttl: Duration,
}

impl HmacSessionCodec {
    pub fn new(secret_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let key = decode_hex(secret_hex)
            .ok_or_else(|| ApplicationError::infrastructure("session secret is not valid hex"))?;
        if key.len() != 32 {
            return Err(ApplicationError::infrastructure(
                "session secret must decode to 32 bytes",
            ));
        }
        Ok(Self { key, ttl })
    }

    fn mac_for(&self, payload: &[u8]) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(&self.key)
            .expect("HMAC accepts keys of any length");
        mac.update(payload);
        mac
    }
}

impl SessionCodec for HmacSessionCodec {
    fn issue(&self, user_id: UserId, now: DateTime<Utc>) -> ApplicationResult<IssuedSession> {
        let ttl_secs = i64::try_from(self.ttl.as_secs())
            .map_err(|_| ApplicationError::infrastructure("session ttl out of range"))?;
        let issued_at = now;
        let expires_at = issued_at + chrono::Duration::seconds(ttl_secs);

        let claims = SessionClaims {
            uid: user_id.into(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };
        let payload = serde_json::to_vec(&claims)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let signature = self.mac_for(&payload).finalize().into_bytes();

        let token = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&payload),
            URL_SAFE_NO_PAD.encode(signature.as_slice())
        );

        Ok(IssuedSession {
            token,
            issued_at,
            expires_at,
        })
    }

    fn verify(&self, token: &str, now: DateTime<Utc>) -> ApplicationResult<SessionClaims> {
        let (payload_b64, signature_b64) = token
            .split_once('.')
            .ok_or_else(|| ApplicationError::unauthorized("malformed session token"))?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| ApplicationError::unauthorized("malformed session token"))?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| ApplicationError::unauthorized("malformed session token"))?;

        // Mac::verify_slice is constant-time.
        self.mac_for(&payload)
            .verify_slice(&signature)
            .map_err(|_| ApplicationError::unauthorized("session signature mismatch"))?;

        let claims: SessionClaims = serde_json::from_slice(&payload)
            .map_err(|_| ApplicationError::unauthorized("malformed session token"))?;

        if now.timestamp() >= claims.exp {
            return Err(ApplicationError::unauthorized("session expired"));
        }

        Ok(claims)
    }
}

fn decode_hex(input: &str) -> Option<Vec<u8>> {
    if input.len() % 2 != 0 {
        return None;
    }
    (0..input.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(input.get(i..i + 2)?, 16).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SECRET: &str = "6d616b696d6f6e6f2d73657373696f6e2d7365637265742d3332627974657321";

    fn codec() -> HmacSessionCodec {
        HmacSessionCodec::new(SECRET, Duration::from_secs(3600)).unwrap()
    }

    fn at(ts: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(ts, 0).unwrap()
    }

    #[test]
    fn issue_then_verify_round_trips() {
        let codec = codec();
        let session = codec.issue(UserId::new(7).unwrap(), at(1_700_000_000)).unwrap();

        let claims = codec.verify(&session.token, at(1_700_000_100)).unwrap();
        assert_eq!(claims.uid, 7);
        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.exp, 1_700_003_600);
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let codec = codec();
        let session = codec.issue(UserId::new(7).unwrap(), at(1_700_000_000)).unwrap();

        let (_, signature) = session.token.split_once('.').unwrap();
        let forged_payload =
            URL_SAFE_NO_PAD.encode(br#"{"uid":1,"iat":1700000000,"exp":1700003600}"#);
        let forged = format!("{forged_payload}.{signature}");

        assert!(codec.verify(&forged, at(1_700_000_100)).is_err());
    }

    #[test]
    fn expired_session_is_rejected() {
        let codec = codec();
        let session = codec.issue(UserId::new(7).unwrap(), at(1_700_000_000)).unwrap();

        assert!(codec.verify(&session.token, at(1_700_003_600)).is_err());
        assert!(codec.verify(&session.token, at(1_700_003_599)).is_ok());
    }

    #[test]
    fn garbage_tokens_are_rejected() {
        let codec = codec();
        assert!(codec.verify("", at(0)).is_err());
        assert!(codec.verify("no-dot-here", at(0)).is_err());
        assert!(codec.verify("!!!.???", at(0)).is_err());
    }

    #[test]
    fn secret_must_be_32_hex_bytes() {
        assert!(HmacSessionCodec::new("abcd", Duration::from_secs(60)).is_err());
        assert!(HmacSessionCodec::new("zz".repeat(32).as_str(), Duration::from_secs(60)).is_err());
        assert!(HmacSessionCodec::new(SECRET, Duration::from_secs(60)).is_ok());
    }
}
