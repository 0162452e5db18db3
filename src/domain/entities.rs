// Badge request after validation; the email is guaranteed well-formed.
#[derive(Clone, Debug, PartialEq)]
pub struct BadgeRequest {
    pub email: String,
    pub name: Option<String>,
    pub photo_url: Option<String>,
}

// Identity with defaults applied, handed to the renderer and the mailer.
// The photo field is never an empty string, only present or absent.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedIdentity {
    pub name: String,
    pub email: String,
    pub photo_url: Option<String>,
}

// Contact-form submission; every field is required and non-empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
