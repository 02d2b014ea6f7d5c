use base64::Engine as _;

use crate::error::AuthError;

/// Decode the JWT `exp` claim without verifying the signature.
///
/// Used for status display only. The server remains the judge of validity.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` if the token is not a three-part JWT or the
/// `exp` claim is missing or cannot be parsed.
pub fn decode_expiry(jwt: &str) -> Result<chrono::DateTime<chrono::Utc>, AuthError> {
    let mut parts = jwt.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(AuthError::InvalidToken("invalid JWT format".into()));
    };
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AuthError::InvalidToken(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::InvalidToken(format!("JSON parse failed: {e}")))?;
    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| AuthError::InvalidToken("missing exp claim".into()))?;
    chrono::DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| AuthError::InvalidToken("invalid exp timestamp".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_jwt(payload: &str) -> String {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let header = engine.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = engine.encode(payload);
        let signature = engine.encode("fake_sig");
        format!("{header}.{payload}.{signature}")
    }

    #[test]
    fn decodes_exp_claim() {
        let exp = chrono::Utc::now().timestamp() + 3600;
        let jwt = make_jwt(&format!(r#"{{"sub":"u-1","exp":{exp}}}"#));
        assert_eq!(decode_expiry(&jwt).unwrap().timestamp(), exp);
    }

    #[test]
    fn rejects_non_jwt() {
        let err = decode_expiry("opaque-token").unwrap_err();
        assert!(err.to_string().contains("invalid JWT format"));
    }

    #[test]
    fn rejects_four_segments() {
        assert!(decode_expiry("a.b.c.d").is_err());
    }

    #[test]
    fn reports_missing_exp() {
        let jwt = make_jwt(r#"{"sub":"u-1"}"#);
        let err = decode_expiry(&jwt).unwrap_err();
        assert!(err.to_string().contains("missing exp claim"));
    }

    #[test]
    fn reports_bad_base64() {
        let err = decode_expiry("header.!!!invalid!!!.signature").unwrap_err();
        assert!(err.to_string().contains("base64 decode failed"));
    }
}
