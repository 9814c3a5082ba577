use std::fmt;

/// Email and password captured at the moment a sign-in attempt starts.
///
/// Immutable once built. The controller hands it off to the submission task
/// and never keeps a copy.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn into_parts(self) -> (String, String) {
        (self.email, self.password)
    }
}

// Passwords must never reach the log file.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_password() {
        let creds = Credentials::new("a@b.com", "hunter2");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("a@b.com"));
        assert!(!rendered.contains("hunter2"));
    }
}
