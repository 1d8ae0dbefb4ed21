//! Password Generator
//!
//! Short random passwords offered on the registration form.

use rand::Rng;

/// Characters a generated password is drawn from
pub const ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()§±<>?:|/{[]-=+~;}";

/// Length of a generated password, in characters
pub const PASSWORD_LENGTH: usize = 8;

/// Generate a password with the thread-local RNG
pub fn generate_password() -> String {
    generate_password_with(&mut rand::thread_rng())
}

/// Generate a password from the given RNG.
///
/// Every position is drawn independently and uniformly from [`ALPHABET`],
/// so characters may repeat.
pub fn generate_password_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let charset: Vec<char> = ALPHABET.chars().collect();

    (0..PASSWORD_LENGTH)
        .map(|_| charset[rng.gen_range(0..charset.len())])
        .collect()
}
