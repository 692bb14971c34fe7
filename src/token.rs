//! Signed attribution tokens for the affiliate cookie.
//!
//! The cookie value is `CODE.hex(HMAC-SHA256(secret, CODE))`, so a client
//! cannot claim attribution for an affiliate code it was never handed.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

fn mac(secret: &str) -> HmacSha256 {
  HmacSha256::new_from_slice(secret.as_bytes())
    .expect("HMAC accepts keys of any length")
}

pub fn sign(code: &str, secret: &str) -> String {
  let mut mac = mac(secret);
  mac.update(code.as_bytes());
  format!("{code}.{}", hex::encode(mac.finalize().into_bytes()))
}

/// Returns the embedded affiliate code when the tag checks out.
pub fn verify<'a>(value: &'a str, secret: &str) -> Option<&'a str> {
  let (code, tag) = value.split_once('.')?;
  let tag = hex::decode(tag).ok()?;

  let mut mac = mac(secret);
  mac.update(code.as_bytes());
  mac.verify_slice(&tag).ok()?;

  Some(code)
}

#[cfg(test)]
mod tests {
  use super::*;

  const SECRET: &str = "test-secret";

  #[test]
  fn sign_verify_roundtrip() {
    let token = sign("ABC12345", SECRET);
    assert_eq!(verify(&token, SECRET), Some("ABC12345"));
  }

  #[test]
  fn tampered_code_rejected() {
    let token = sign("ABC12345", SECRET);
    let forged = token.replacen("ABC12345", "XYZ99999", 1);
    assert_eq!(verify(&forged, SECRET), None);
  }

  #[test]
  fn wrong_secret_rejected() {
    let token = sign("ABC12345", SECRET);
    assert_eq!(verify(&token, "other-secret"), None);
  }

  #[test]
  fn raw_code_without_tag_rejected() {
    assert_eq!(verify("ABC12345", SECRET), None);
    assert_eq!(verify("ABC12345.nothex", SECRET), None);
  }
}
