use rand::Rng;
use uuid::Uuid;

pub const CODE_LEN: usize = 8;

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random 8-character uppercase alphanumeric affiliate code.
/// Uniqueness is checked by the caller against the store.
pub fn affiliate_code() -> String {
  let mut rng = rand::thread_rng();
  (0..CODE_LEN)
    .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
    .collect()
}

/// Public order identifier: first segment of a random UUID, uppercased.
pub fn order_code() -> String {
  Uuid::new_v4().to_string()[..CODE_LEN].to_uppercase()
}

pub fn slugify(name: &str) -> String {
  let mut slug = String::with_capacity(name.len());
  let mut dash = false;
  for ch in name.chars() {
    if ch.is_ascii_alphanumeric() {
      slug.push(ch.to_ascii_lowercase());
      dash = false;
    } else if !dash && !slug.is_empty() {
      slug.push('-');
      dash = true;
    }
  }
  if slug.ends_with('-') {
    slug.pop();
  }
  slug
}
