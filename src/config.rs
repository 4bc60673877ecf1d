use dioxus_logger::tracing::Level;

pub const LOG_LEVEL: Level = if cfg!(debug_assertions) {
    Level::DEBUG
} else {
    Level::INFO
};

pub const OWNER_NAME: &str = "Samiksha Chandel";
pub const OWNER_ROLE: &str = "ML Enthusiast";
pub const AVAILABILITY: &str = "Available for internships";

pub const RESUME_URL: &str = "https://your-resume-link-here.com";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/samiksha-chandel";
pub const GITHUB_URL: &str = "https://github.com/samiksha-chandel";

/// The only contact address the site shows; every mail link derives from it.
pub const CONTACT_EMAIL: &str = "jennachandel14@gmail.com";

pub fn mailto_link() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_uses_contact_email() {
        assert_eq!(mailto_link(), "mailto:jennachandel14@gmail.com");
    }

    #[test]
    fn outbound_links_are_https() {
        for url in [RESUME_URL, LINKEDIN_URL, GITHUB_URL] {
            assert!(url.starts_with("https://"), "{url}");
        }
    }
}
