/// Mask a secret for display. Short values become dots only; longer ones
/// keep a short prefix and suffix so the user can recognize which secret
/// is loaded.
pub fn mask_secret(secret: &str) -> String {
    let len = secret.chars().count();
    if len <= 15 {
        // Too short to safely show, just show dots
        return "•".repeat(len);
    }

    let first: String = secret.chars().take(7).collect();
    let last: String = secret.chars().skip(len - 6).collect();
    format!("{first}...{last}")
}
