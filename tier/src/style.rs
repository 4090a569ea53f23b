/// How a tier is presented in the result modal.
#[derive(Debug, PartialEq, Eq)]
pub struct TierStyle {
    /// Accent color as a css hex value.
    pub color: &'static str,
    /// Utility classes for the badge background and text.
    pub badge_class: &'static str,
    pub message: Option<&'static str>,
}

static KNOWN: [(&str, TierStyle); 4] = [
    (
        "bronze",
        TierStyle {
            color: "#CD7F32",
            badge_class: "bg-[#CD7F32] text-white",
            message: Some("Welcome to the Creatorverse family!"),
        },
    ),
    (
        "silver",
        TierStyle {
            color: "#C0C0C0",
            badge_class: "bg-[#C0C0C0] text-[#232324]",
            message: Some("You're an active creator with us!"),
        },
    ),
    (
        "gold",
        TierStyle {
            color: "#FFD700",
            badge_class: "bg-[#FFD700] text-[#232324]",
            message: Some("You're a valued creator in our community!"),
        },
    ),
    (
        "platinum",
        TierStyle {
            color: "#E5E4E2",
            badge_class: "bg-[#E5E4E2] text-[#232324]",
            message: Some("You're in our elite creator tier!"),
        },
    ),
];

static FALLBACK: TierStyle = TierStyle {
    color: "#1364DB",
    badge_class: "bg-[#1364DB] text-white",
    message: None,
};

impl TierStyle {
    /// Case-insensitive lookup on the trimmed tier name.
    pub fn of(tier: &str) -> &'static TierStyle {
        let tier = tier.trim();
        KNOWN
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(tier))
            .map(|(_, style)| style)
            .unwrap_or(&FALLBACK)
    }

    pub fn fallback() -> &'static TierStyle {
        &FALLBACK
    }
}
