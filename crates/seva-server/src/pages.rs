//! Landing pages.
//!
//! Two variants share one template: the institutional offering page and the
//! alpha concept-platform page. Both render the same three summary cards
//! once KPI data is available, and a loading placeholder otherwise.

use askama::Template;

use seva_core::{format_currency, format_currency_amount, group_thousands, KpiSnapshot};

/// Social return multiple applied to the wage gain for the impact card.
pub const SOCIAL_ROI_MULTIPLE: u64 = 36;

/// Static page shown at the site root in redirect mode.
pub const DOSSIER_PATH: &str = "/seva.html";

/// Landing-page variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteVariant {
    /// Institutional offering
    Offering,
    /// Alpha concept platform
    Concept,
}

impl SiteVariant {
    /// Marketing copy for this variant.
    pub fn copy(self) -> &'static LandingCopy {
        match self {
            SiteVariant::Offering => &OFFERING_COPY,
            SiteVariant::Concept => &CONCEPT_COPY,
        }
    }
}

/// A labelled hyperlink.
#[derive(Debug, Clone, Copy)]
pub struct Link {
    /// Link target
    pub href: &'static str,
    /// Link text
    pub label: &'static str,
}

/// Marketing copy of one landing-page variant.
#[derive(Debug)]
pub struct LandingCopy {
    /// Document title
    pub title: &'static str,
    /// Meta description
    pub description: &'static str,
    /// Open Graph title
    pub og_title: &'static str,
    /// Open Graph description
    pub og_description: &'static str,
    /// Robots directive
    pub robots: &'static str,
    /// Line above the headline
    pub tagline: &'static str,
    /// Offering headline
    pub headline: &'static str,
    /// Text before the productivity figure
    pub pitch_lead: &'static str,
    /// Text between the productivity figure and the ROI figure
    pub pitch_middle: &'static str,
    /// Disclaimer banner, if any
    pub disclaimer: Option<&'static str>,
    /// Primary call to action
    pub primary_cta: Link,
    /// Secondary call to action
    pub secondary_cta: Link,
    /// Heading above the badges
    pub badges_heading: &'static str,
    /// Badge labels
    pub badges: &'static [&'static str],
    /// Document links under the badges
    pub quick_links: &'static [Link],
    /// Contact panel heading
    pub contact_heading: &'static str,
    /// Contact panel blurb
    pub contact_blurb: &'static str,
    /// Contact panel status line
    pub contact_status: &'static str,
}

/// Copy of the institutional offering page.
pub static OFFERING_COPY: LandingCopy = LandingCopy {
    title: "Seva Capital - $7B SDG Bond Offering | Institutional Investors",
    description: "$7 Billion SDG-Aligned Social Bond for Global Eye Health Infrastructure - ICMA Compliant, Moody's ESG Verified, 36:1 Social ROI",
    og_title: "Seva Capital - $7B SDG Bond Offering",
    og_description: "Investment-grade impact opportunity: $7B social bond targeting BlackRock, sovereign funds, and institutional ESG portfolios",
    robots: "index, follow",
    tagline: "Institutional Offering • ICMA Compliant • Moody's ESG Verified",
    headline: "$7.0 Billion SDG-Aligned Social Bond",
    pitch_lead: "Investment-grade opportunity to unlock",
    pitch_middle: "in human productivity through proven eye-care infrastructure at a verified",
    disclaimer: None,
    primary_cta: Link {
        href: "/public/pitch.html",
        label: "View Investor Pitch",
    },
    secondary_cta: Link {
        href: "/public/investor_portal.html",
        label: "Live Investor Portal",
    },
    badges_heading: "Verified By",
    badges: &["ICMA COMPLIANT", "MOODY'S ESG", "GISD ALIGNED", "CBI CERTIFIED"],
    quick_links: &[
        Link {
            href: "/public/keynote/present.html",
            label: "$27.8B Full Strategy Deck",
        },
        Link {
            href: "/public/icma.html",
            label: "ICMA Framework",
        },
        Link {
            href: "/public/gisd-compliance.html",
            label: "GISD Compliance",
        },
        Link {
            href: "/public/seva.html",
            label: "Strategy Dossier",
        },
    ],
    contact_heading: "Investor Relations",
    contact_blurb: "Independent capital syndicate raising institutional funding for Seva Foundation's global eye health programs",
    contact_status: "Timeline to Close: 16 Weeks",
};

/// Copy of the alpha concept-platform page.
pub static CONCEPT_COPY: LandingCopy = LandingCopy {
    title: "Seva Capital - SDG Bond Concept | Alpha Platform",
    description: "Alpha platform demonstrating SDG-aligned social bond structure for global eye health infrastructure with 36:1 social ROI projection",
    og_title: "Seva Capital - SDG Bond Concept Platform",
    og_description: "Concept platform for SDG-aligned social bond supporting Seva Foundation's global eye health programs",
    robots: "noindex, nofollow",
    tagline: "Alpha Platform • Concept Demo • Not Financial Advice",
    headline: "SDG-Aligned Social Bond Concept",
    pitch_lead: "Demonstrating how structured finance could unlock",
    pitch_middle: "in human productivity through eye-care infrastructure with projected",
    disclaimer: Some(
        "This is a concept demonstration. No securities are currently offered. Data is simulated for illustrative purposes.",
    ),
    primary_cta: Link {
        href: "/pitch.html",
        label: "View Concept Pitch",
    },
    secondary_cta: Link {
        href: "/investor_portal.html",
        label: "Demo Portal",
    },
    badges_heading: "Framework References",
    badges: &["ICMA Principles", "SDG Aligned", "Impact Thesis"],
    quick_links: &[
        Link {
            href: "/keynote/present.html",
            label: "Strategy Overview",
        },
        Link {
            href: "/icma.html",
            label: "Bond Framework",
        },
        Link {
            href: "/gisd-compliance.html",
            label: "SDG Mapping",
        },
        Link {
            href: "/seva.html",
            label: "Impact Dossier",
        },
    ],
    contact_heading: "Platform Information",
    contact_blurb: "Concept platform demonstrating structured finance approach for Seva Foundation's global eye health programs",
    contact_status: "Status: Alpha Testing",
};

/// One of the three headline cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    /// Large figure
    pub value: String,
    /// Caption under the figure
    pub label: &'static str,
    /// Supporting detail line
    pub detail: String,
}

/// Build the three summary cards from a snapshot.
pub fn summary_cards(kpi: &KpiSnapshot) -> Vec<SummaryCard> {
    vec![
        SummaryCard {
            value: format_currency(kpi.bond.notional),
            label: "Bond Notional",
            detail: format!(
                "{}% Allocated • {} months remaining",
                kpi.bond.allocation_percent, kpi.bond.months_remaining
            ),
        },
        SummaryCard {
            value: format!("{}:1", SOCIAL_ROI_MULTIPLE),
            label: "Social ROI",
            detail: format!(
                "Proven impact across 50+ years • {} surgeries funded",
                group_thousands(kpi.impact.surgeries.current)
            ),
        },
        SummaryCard {
            value: format_currency_amount(
                kpi.impact.wage_gain.current as f64 * SOCIAL_ROI_MULTIPLE as f64,
            ),
            label: "Impact Unlocked",
            detail: format!(
                "{} DALYs Averted • SDG 3, 8, 5 Aligned",
                kpi.impact.dalys.formatted
            ),
        },
    ]
}

/// A rendered landing page.
///
/// `cards` is `None` until KPI data has loaded; the page then shows its
/// loading placeholder instead.
#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingPage {
    /// Variant copy
    pub copy: &'static LandingCopy,
    /// Summary cards, when data loaded
    pub cards: Option<Vec<SummaryCard>>,
}

impl LandingPage {
    /// Page for `variant`, with cards when `kpi` is present.
    pub fn new(variant: SiteVariant, kpi: Option<&KpiSnapshot>) -> Self {
        Self {
            copy: variant.copy(),
            cards: kpi.map(summary_cards),
        }
    }
}
