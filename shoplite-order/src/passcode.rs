use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Length of the one-time code handed to the customer at checkout.
pub const PASSCODE_LEN: usize = 5;

const BCRYPT_COST: u32 = 10;

/// A freshly issued passcode. The plaintext is shown to the customer once
/// and never stored; only the hash is persisted on the order.
#[derive(Debug)]
pub struct IssuedPasscode {
    pub plaintext: String,
    pub hash: String,
}

/// Generate a new one-time code and its salted hash.
pub fn issue() -> Result<IssuedPasscode, bcrypt::BcryptError> {
    let plaintext = generate(PASSCODE_LEN);
    let hash = bcrypt::hash(&plaintext, BCRYPT_COST)?;
    Ok(IssuedPasscode { plaintext, hash })
}

/// Check a presented code against a stored hash. Any mismatch or malformed
/// hash yields `false`; a wrong guess is not an error.
pub fn verify(hash: &str, presented: &str) -> bool {
    bcrypt::verify(presented, hash).unwrap_or(false)
}

/// Draws from the 62-symbol alphanumeric alphabet, seeding a fresh source
/// from the clock per call.
fn generate(len: usize) -> String {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    StdRng::seed_from_u64(seed)
        .sample_iter(Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_passcode_verifies() {
        let issued = issue().unwrap();
        assert_eq!(issued.plaintext.len(), PASSCODE_LEN);
        assert!(issued.plaintext.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(verify(&issued.hash, &issued.plaintext));
    }

    #[test]
    fn wrong_code_does_not_verify() {
        let issued = issue().unwrap();
        assert!(!verify(&issued.hash, "zzzzz"));
        assert!(!verify(&issued.hash, ""));
    }

    #[test]
    fn malformed_hash_is_a_mismatch_not_a_panic() {
        assert!(!verify("", "abc12"));
        assert!(!verify("not-a-bcrypt-hash", "abc12"));
    }
}
