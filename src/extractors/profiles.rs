// src/extractors/profiles.rs
use once_cell::sync::Lazy;
use regex::Regex;

static LINKEDIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://(?:www\.)?linkedin\.com/[a-zA-Z0-9_/-]+|www\.linkedin\.com/[a-zA-Z0-9_/-]+")
        .expect("Failed to compile LINKEDIN_RE")
});

static FACEBOOK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://(?:www\.)?facebook\.com/\S+").expect("Failed to compile FACEBOOK_RE")
});

static X_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://(?:www\.)?(?:twitter|x)\.com/\S+").expect("Failed to compile X_RE")
});

static GITHUB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://github\.com/[a-zA-Z0-9_-]+").expect("Failed to compile GITHUB_RE")
});

/// Every profile URL found per platform. No pattern populates `website`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialProfiles {
    pub linkedin: Vec<String>,
    pub github: Vec<String>,
    pub facebook: Vec<String>,
    pub x: Vec<String>,
    pub website: Vec<String>,
}

pub fn extract_profiles(text: &str) -> SocialProfiles {
    let find_all = |re: &Regex| re.find_iter(text).map(|m| m.as_str().to_string()).collect::<Vec<_>>();

    SocialProfiles {
        linkedin: find_all(&LINKEDIN_RE),
        github: find_all(&GITHUB_RE),
        facebook: find_all(&FACEBOOK_RE),
        x: find_all(&X_RE),
        website: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_per_platform() {
        let text = "LinkedIn: https://www.linkedin.com/in/jane-roe\n\
                    GitHub: https://github.com/janeroe/dotfiles\n\
                    www.linkedin.com/in/jane-alt\n\
                    Twitter: https://twitter.com/janeroe x: https://x.com/jr\n\
                    https://facebook.com/jane.roe.7";
        let profiles = extract_profiles(text);
        assert_eq!(
            profiles.linkedin,
            vec!["https://www.linkedin.com/in/jane-roe", "www.linkedin.com/in/jane-alt"]
        );
        assert_eq!(profiles.github, vec!["https://github.com/janeroe"]);
        assert_eq!(profiles.x, vec!["https://twitter.com/janeroe", "https://x.com/jr"]);
        assert_eq!(profiles.facebook, vec!["https://facebook.com/jane.roe.7"]);
        assert!(profiles.website.is_empty());
    }

    #[test]
    fn test_no_profiles() {
        assert_eq!(extract_profiles("jane@example.com"), SocialProfiles::default());
    }
}
