// src/site/content.rs
//
// Static copy for the marketing pages: service cards, learn-more pages,
// portfolio tiles and the quote form's service options.

pub const TAGLINE: &str = "Prep-First Craftsmanship. Premium finishes. Zero mess.";

/// Options offered by the quote form's `service` select.
pub const QUOTE_SERVICES: [&str; 4] = [
    "Residential painting",
    "Commercial painting",
    "Surface preparation",
    "Premium finish / repaint",
];

#[derive(Debug, Clone, Copy)]
pub struct ServiceCard {
    pub title: &'static str,
    pub line1: &'static str,
    pub line2: &'static str,
    pub href: &'static str,
    /// Element id on /services, matched by the learn page's back link.
    pub anchor: &'static str,
    /// Bullets on the /services overview.
    pub bullets: &'static [&'static str],
}

pub static SERVICES: [ServiceCard; 4] = [
    ServiceCard {
        title: "Residential painting",
        line1: "Interior + exterior. Walls, ceilings, doors, trims. Colour guidance available.",
        line2: "Fast turnarounds with clean protection and tidy handover.",
        href: "/learn/residential",
        anchor: "residential",
        bullets: &[
            "Interior & exterior house painting",
            "Walls, ceilings, doors, and trims",
            "Apartments, townhouses, and villas",
            "Colour consultation available",
            "Clean, tidy, respectful service",
        ],
    },
    ServiceCard {
        title: "Commercial painting",
        line1: "Offices, retail, strata maintenance. Scheduling to minimise disruption.",
        line2: "Durable coatings with professional-grade materials and consistent finish.",
        href: "/learn/commercial",
        anchor: "commercial",
        bullets: &[
            "Offices, shops, and retail spaces",
            "Strata & property maintenance painting",
            "Flexible scheduling to minimise disruption",
            "Durable, professional-grade finishes",
        ],
    },
    ServiceCard {
        title: "Surface preparation",
        line1: "Repairs, patching, crack fill, sanding, old paint removal.",
        line2: "Prep-first approach for adhesion and long-lasting results.",
        href: "/learn/prep",
        anchor: "prep",
        bullets: &[
            "Wall repairs and patching",
            "Crack filling and plaster touch-ups",
            "Sanding and smoothing surfaces",
            "Removal of old, peeling paint",
        ],
    },
    ServiceCard {
        title: "Premium finish",
        line1: "High-quality paints, smooth coats, detailed edge work.",
        line2: "Straight lines, even coverage and a final walkthrough.",
        href: "/learn/premium-finish",
        anchor: "finish",
        bullets: &[
            "High-quality paints and materials",
            "Smooth, even coats with long-lasting results",
            "Detail work on edges and corners",
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct LearnPage {
    /// Path segment under /learn/.
    pub slug: &'static str,
    /// Anchor on /services the "back" button points at.
    pub anchor: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub highlights: &'static [&'static str],
    pub included: &'static [&'static str],
    pub process: &'static [&'static str],
    pub faqs: &'static [Faq],
    pub preview: &'static str,
}

pub static LEARN_PAGES: [LearnPage; 4] = [
    LearnPage {
        slug: "residential",
        anchor: "residential",
        title: "Residential painting",
        subtitle: "Interior and exterior painting with clean preparation, crisp edges, and a tidy handover.",
        highlights: &["Low-mess setup", "Colour guidance available", "Respectful, tidy worksite"],
        included: &[
            "Walls, ceilings, doors and trims",
            "Apartments, townhouses, villas and houses",
            "Surface prep, patching and crack filling as needed",
            "Premium paints for a smooth, even finish",
            "Final walkthrough and touch-ups",
        ],
        process: &[
            "Protect floors and furniture, mask and cover surfaces",
            "Patch, sand, and prime where required",
            "Cut-in edges and detail areas",
            "Apply 2+ coats for even coverage",
            "Clean-up and final walkthrough",
        ],
        faqs: &[
            Faq {
                question: "How long does a typical job take?",
                answer: "Most interiors take 1–3 days depending on size and prep. We’ll confirm a timeline after an onsite look.",
            },
            Faq {
                question: "Do you help with colour selection?",
                answer: "Yes. We can guide you on finishes, sheen levels, and colour direction that suits your space and lighting.",
            },
            Faq {
                question: "Will you protect my floors and furniture?",
                answer: "Always. We use drop sheets, masking, and careful setup to keep things clean.",
            },
            Faq {
                question: "Do I need to move everything?",
                answer: "We can work around furniture where possible. We’ll tell you exactly what needs moving before we start.",
            },
        ],
        preview: "/static/residential.png",
    },
    LearnPage {
        slug: "commercial",
        anchor: "commercial",
        title: "Commercial painting",
        subtitle: "Durable coatings for offices, retail, and strata, scheduled to minimise disruption.",
        highlights: &["After-hours options", "Durable, pro-grade finishes", "Strata & maintenance ready"],
        included: &[
            "Offices, shops, retail and common areas",
            "Strata and property maintenance painting",
            "Low-odour options where needed",
            "Durable coatings for high-traffic areas",
            "Clear staging plan and site communication",
        ],
        process: &[
            "Plan staging around trading/tenants",
            "Protect surfaces and set up clean work zones",
            "Repair, sand and prime as required",
            "Apply specified coating system for durability",
            "Handover with checklists and touch-ups",
        ],
        faqs: &[
            Faq {
                question: "Can you work after hours?",
                answer: "Yes. We can schedule evenings/weekends to keep disruption low.",
            },
            Faq {
                question: "Do you provide maintenance plans?",
                answer: "We can suggest a maintenance schedule for high-traffic areas and strata common spaces.",
            },
            Faq {
                question: "Can you match existing colours?",
                answer: "Yes. We can colour-match or work from existing paint codes.",
            },
            Faq {
                question: "Are your coatings commercial grade?",
                answer: "We use quality systems suited to the surface and traffic level.",
            },
        ],
        preview: "/static/commercial.png",
    },
    LearnPage {
        slug: "prep",
        anchor: "prep",
        title: "Surface preparation",
        subtitle: "The foundation of a premium finish: repairs, patching, sanding, and clean priming.",
        highlights: &["Smooth base", "Better adhesion", "Longer-lasting finish"],
        included: &[
            "Wall repairs and patching",
            "Crack filling and plaster touch-ups",
            "Sanding and smoothing for an even surface",
            "Removal of peeling/flaking paint",
            "Priming for adhesion and stain blocking",
        ],
        process: &[
            "Inspect surfaces and identify failures (cracks, peeling, stains)",
            "Scrape loose material and feather edges",
            "Patch and sand to a smooth finish",
            "Spot-prime repairs and problem areas",
            "Final dust-down and readiness check",
        ],
        faqs: &[
            Faq {
                question: "Why does prep matter so much?",
                answer: "Prep determines adhesion and how smooth the final finish looks. It is the difference between ‘good’ and ‘premium’.",
            },
            Faq {
                question: "Can you fix cracks and holes?",
                answer: "Yes. We patch, fill, and sand before painting.",
            },
            Faq {
                question: "Do you remove peeling paint?",
                answer: "We remove loose paint and stabilise edges so new coats won’t fail.",
            },
            Faq {
                question: "Will the wall look perfectly smooth?",
                answer: "We aim for a clean, even result. For ‘level 5’ finishes we can discuss additional skim/finishing options.",
            },
        ],
        preview: "/static/surface-prep.png",
    },
    LearnPage {
        slug: "premium-finish",
        anchor: "finish",
        title: "Premium finish",
        subtitle: "High-quality materials, sharp edge work, and consistent coverage for a polished result.",
        highlights: &["Premium paints", "Crisp cut-ins", "Even, durable coats"],
        included: &[
            "High-quality paints and materials",
            "Smooth, even coats with long-lasting results",
            "Detail work on edges and corners",
            "Trim/door finishing as needed",
            "Final walkthrough and touch-ups",
        ],
        process: &[
            "Confirm sheen/finish and colour direction",
            "Cut-in edges and detail areas cleanly",
            "Apply 2+ coats for consistency",
            "Check for holidays/patchiness under lighting",
            "Final touch-ups and walkthrough",
        ],
        faqs: &[
            Faq {
                question: "What makes a finish ‘premium’?",
                answer: "Even coverage, clean edges, correct sheen, and careful lighting checks, plus quality materials.",
            },
            Faq {
                question: "Do you use premium paint brands?",
                answer: "We use quality paints suited to the job and can recommend options based on durability and washability.",
            },
            Faq {
                question: "Can you do feature walls?",
                answer: "Yes. Feature colours and different sheen levels are no problem.",
            },
            Faq {
                question: "Do you guarantee your work?",
                answer: "We stand by our workmanship and will address any reasonable issues after completion.",
            },
        ],
        preview: "/static/premium-finish.png",
    },
];

pub fn learn_page(slug: &str) -> Option<&'static LearnPage> {
    LEARN_PAGES.iter().find(|p| p.slug == slug)
}

#[derive(Debug, Clone, Copy)]
pub struct PortfolioItem {
    pub img: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub static PORTFOLIO_ITEMS: [PortfolioItem; 6] = [
    PortfolioItem {
        img: "/static/portfolio/portfolio-1.png",
        title: "Coastal exterior repaint",
        subtitle: "Weather-ready, crisp trims",
    },
    PortfolioItem {
        img: "/static/portfolio/portfolio-2.png",
        title: "Modern commercial frontage",
        subtitle: "Durable finish, minimal downtime",
    },
    PortfolioItem {
        img: "/static/portfolio/portfolio-3.png",
        title: "Living room refresh",
        subtitle: "Smooth walls + clean cut lines",
    },
    PortfolioItem {
        img: "/static/portfolio/portfolio-4.png",
        title: "Feature wall + staircase",
        subtitle: "Colour balance and detail work",
    },
    PortfolioItem {
        img: "/static/portfolio/portfolio-5.png",
        title: "Surface prep & patching",
        subtitle: "Repairs, sanding, paint-ready",
    },
    PortfolioItem {
        img: "/static/portfolio/portfolio-6.png",
        title: "Premium finish kitchen",
        subtitle: "Even coats, long-lasting sheen",
    },
];

/// Paths listed in sitemap.xml.
pub const SITEMAP_PATHS: [&str; 4] = ["/", "/services", "/portfolio", "/contact"];
