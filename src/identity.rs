//! Fixed pool of fake identities handed out by the login endpoint

/// Display names of the mock users, in a stable order.
pub const IDENTITIES: [&str; 10] = [
    "Alice Johnson",
    "Bob Smith",
    "Charlie Brown",
    "Diana Prince",
    "Ethan Hunt",
    "Fiona Green",
    "George Miller",
    "Hannah Lee",
    "Ian Wright",
    "Julia Roberts",
];

const _: () = assert!(!IDENTITIES.is_empty());

const EMAIL_DOMAIN: &str = "example.com";

/// Pick one identity with uniform probability.
pub fn pick_random() -> &'static str {
    IDENTITIES[rand::random_range(0..IDENTITIES.len())]
}

/// Mock email address for an identity.
///
/// Only the first space becomes a dot, so "Mary Ann Lee" maps to
/// "mary.ann lee@example.com". Clients rely on this exact shape.
pub fn derive_email(identity: &str) -> String {
    let local = identity.to_lowercase().replacen(' ', ".", 1);
    format!("{local}@{EMAIL_DOMAIN}")
}
