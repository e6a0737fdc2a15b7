//! Static copy of the landing page.

pub const BRAND: &str = "Prep2Hire";
pub const TAGLINE: &str = "Career‑focused tech cohorts. Learn by building.";

pub const HERO_BADGE: &str = "30 Days • Interview-Ready";
pub const HERO_TITLE: &str = "Master Java & Spring Boot";
pub const HERO_TITLE_ACCENT: &str = "by Building & Interviewing";
pub const HERO_LEAD: &str = "Live cohorts, hands-on projects, mock interviews, and personalized feedback. \
                             Limited seats per batch. Secure yours now.";
pub const HIGHLIGHTS: [&str; 4] =
    ["Weekend-only cohorts", "Job-ready projects", "1:1 doubt support", "Certificate on completion"];
pub const NEXT_COHORT: &str = "Sept 21";

pub const CARD_TITLE: &str = "Register for the Cohort";
pub const CARD_LEAD: &str = "Fill your details and we’ll email the next steps within minutes.";
pub const BATCH_NOTE: &str = "Classes are held on weekends only.";
pub const CONSENT_LABEL: &str =
    "I agree to receive course updates over email/WhatsApp and accept the terms & privacy policy.";
pub const NO_SPAM: &str = "No spam. You can opt out anytime.";

/// A card in the "why us" grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Project-first learning",
        description: "Ship a real-world app (APIs, DB, auth, deployment) you can demo in interviews.",
    },
    Feature {
        title: "Interview prep woven in",
        description: "Daily MCQs, DSA drills, and weekly mock interviews with feedback.",
    },
    Feature {
        title: "Career outcomes",
        description: "Resume revamp, LinkedIn polish, referrals, and job search strategy.",
    },
];

/// `(days, topics)` rows of the curriculum snapshot.
pub const CURRICULUM: [(&str, &str); 6] = [
    ("Day 1–5", "Core Java, OOP, Collections"),
    ("Day 6–10", "Streams, Generics, Exceptions"),
    ("Day 11–15", "Spring Boot REST APIs, JPA/Hibernate"),
    ("Day 16–20", "Security, JWT, Validation, Swagger"),
    ("Day 21–25", "Microservices patterns, Kafka basics"),
    ("Day 26–30", "Project build & interview prep"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fee {
    pub label: &'static str,
    pub price: &'static str,
    pub note: &'static str,
}

pub const FEES: [Fee; 2] = [
    Fee { label: "Early-bird", price: "₹9,999", note: "till Sept 15" },
    Fee { label: "Standard", price: "₹12,999", note: "after Sept 15" },
];
pub const FEES_NOTE: &str = "EMI/No‑cost options available. Scholarships for deserving candidates.";

/// `(question, answer)` pairs.
pub const FAQ: [(&str, &str); 4] = [
    ("Is this live or recorded?", "Live sessions with recordings available for revision."),
    ("What if I miss a class?", "You can catch up via recordings and mentor office hours."),
    (
        "Do you provide placement support?",
        "Yes. Resume, LinkedIn, referrals where possible, and interview prep.",
    ),
    ("What are the class timings?", "Weekend and weekday batches available. Pick what suits you."),
];

pub const LEGAL: &str = "Terms • Privacy • Refund policy";

pub const THANKS_TITLE: &str = "You’re in!";
pub const THANKS_LEAD: &str =
    "Thanks for registering. Check your inbox for the cohort schedule and onboarding steps.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fees_are_listed_in_rupees() {
        assert_eq!(FEES.map(|fee| fee.price), ["₹9,999", "₹12,999"]);
    }

    #[test]
    fn curriculum_covers_thirty_days() {
        assert_eq!(CURRICULUM.first().map(|(days, _)| *days), Some("Day 1–5"));
        assert_eq!(CURRICULUM.last().map(|(days, _)| *days), Some("Day 26–30"));
    }
}
