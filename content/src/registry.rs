use serde::Serialize;

use crate::module::Module;

// navigation targets
pub const REGISTER_HREF: &str = "/register";
pub const CONTACT_HREF: &str = "mailto:hello@fabricode.io";

pub const BRAND_NAME: &str = "Fabricode OS";

// hrefs are opaque to the rendering layer: in-page anchors, routes and external urls are all
// passed through as-is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub type FooterLink = NavLink;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FooterGroup {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

impl SocialLink {
    pub fn badge(&self) -> String {
        self.icon.to_uppercase()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SupportCard {
    pub title: &'static str,
    pub description: &'static str,
    pub cta: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PricingPlan {
    pub name: &'static str,
    pub summary: &'static str,
    pub badge: &'static str,
    pub price_headline: &'static str,
    pub price_qualifier: &'static str,
    pub price_followup: &'static str,
    pub cta_label: &'static str,
    pub cta_href: &'static str,
}

// registry order is display order
pub static MODULES: &[Module] = &[
    Module {
        id: "weave-os",
        slug: "weaveos",
        name: "weaveOS",
        icon: "🧵",
        title: "Weaving Operations",
        headline: "Every loom, every pick, in real time.",
        description: "weaveOS digitises weaving floors with live loom telemetry and shift planning. It harmonises warp preparation, beam changes and efficiency reporting across every mill.",
        capabilities: &[
            "Live loom status and stoppage tracking",
            "Beam and warp preparation scheduling",
            "Shift efficiency and pick-rate analytics",
            "Fabric defect logging at the loom",
        ],
    },
    Module {
        id: "dye-os",
        slug: "dyeos",
        name: "dyeOS",
        icon: "🎨",
        title: "Dyehouse Management",
        headline: "Right shade, first time.",
        description: "dyeOS orchestrates recipes, batches and machines across the dyehouse. It keeps shade approvals, chemical consumption and water usage under one roof",
        capabilities: &[
            "Recipe and shade library with lab approvals",
            "Batch planning across jet and jigger machines",
            "Chemical and dyestuff consumption tracking",
            "Water and energy usage per batch",
        ],
    },
    Module {
        id: "flow-os",
        slug: "flowos",
        name: "flowOS",
        icon: "🔀",
        title: "Workflow Automation",
        headline: "From order intake to dispatch, without the paperwork.",
        description: "flowOS automates approvals and hand-offs between departments. It routes tasks to the right team in the right tenant with full audit trails.",
        capabilities: &[
            "Configurable approval chains per tenant",
            "Department hand-off boards",
            "SLA timers and escalation rules",
            "Complete audit history for every step",
        ],
    },
    Module {
        id: "stock-os",
        slug: "stockos",
        name: "stockOS",
        icon: "📦",
        title: "Inventory & Warehousing",
        headline: "Know every roll, bale and cone.",
        description: "stockOS tracks fibre, yarn and fabric inventory from receipt to shipment. It reconciles stock across warehouses and sites with lot-level traceability.",
        capabilities: &[
            "Lot and roll level traceability",
            "Multi-warehouse transfers",
            "Minimum stock alerts and reorder points",
            "Barcode and QR driven movements",
        ],
    },
    Module {
        id: "order-os",
        slug: "orderos",
        name: "orderOS",
        icon: "🧾",
        title: "Order Management",
        headline: "Promise dates you can keep.",
        description: "orderOS connects customer orders to production capacity. It keeps sales, planning and logistics aligned on a single order book.",
        capabilities: &[
            "Customer order book with revisions",
            "Capacity-aware delivery promises",
            "Production order generation",
            "Dispatch and invoicing hand-off",
        ],
    },
    Module {
        id: "ai-os",
        slug: "aios",
        name: "AIOS",
        icon: "🤖",
        title: "Fabric Intelligence",
        headline: "Insights that spot problems before they cost you.",
        description: "AIOS applies anomaly detection and forecasting to production data. It surfaces quality risks, demand shifts and machine issues across every tenant.",
        capabilities: &[
            "Anomaly detection on machine telemetry",
            "Demand and capacity forecasting",
            "Natural language production queries",
            "Quality risk scoring per lot",
        ],
    },
];

pub static NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "About",
        href: "#about",
    },
    NavLink {
        label: "Pricing",
        href: "#pricing",
    },
    NavLink {
        label: "Support",
        href: "#support",
    },
];

// the nav renders this link as the trigger for the modules preview
pub const MODULES_NAV_LINK: NavLink = NavLink {
    label: "Modules",
    href: "#modules",
};

pub static FOOTER_GROUPS: &[FooterGroup] = &[
    FooterGroup {
        title: "Product",
        links: &[
            FooterLink {
                label: "Modules",
                href: "#modules",
            },
            FooterLink {
                label: "Pricing",
                href: "#pricing",
            },
            FooterLink {
                label: "Get Started",
                href: REGISTER_HREF,
            },
        ],
    },
    FooterGroup {
        title: "Company",
        links: &[
            FooterLink {
                label: "About",
                href: "#about",
            },
            FooterLink {
                label: "Support",
                href: "#support",
            },
            FooterLink {
                label: "Contact",
                href: CONTACT_HREF,
            },
        ],
    },
    FooterGroup {
        title: "Resources",
        links: &[
            FooterLink {
                label: "Support Portal",
                href: "https://support.fabricode.io",
            },
            FooterLink {
                label: "Developer Hub",
                href: "https://developers.fabricode.io",
            },
        ],
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        icon: "in",
        href: "https://www.linkedin.com/company/fabricode",
    },
    SocialLink {
        label: "X",
        icon: "x",
        href: "https://x.com/fabricode",
    },
    SocialLink {
        label: "GitHub",
        icon: "gh",
        href: "https://github.com/fabricode",
    },
];

pub static SUPPORT_CARDS: &[SupportCard] = &[
    SupportCard {
        title: "Implementation Desk",
        description: "Dedicated textile specialists to guide tenant rollout, integrations, and module calibration.",
        cta: "Book onboarding call",
        href: "mailto:implement@fabricode.io",
    },
    SupportCard {
        title: "Support Center",
        description: "Knowledge base and ticketing tailored for weaving, dyeing, logistics, and QA teams.",
        cta: "Visit support portal",
        href: "https://support.fabricode.io",
    },
    SupportCard {
        title: "Developer Hub",
        description: "API reference, SDKs, and sandbox tenants to extend Fabricode OS into your infrastructure.",
        cta: "Explore developer docs",
        href: "https://developers.fabricode.io",
    },
];

pub const PRICING_PLAN: PricingPlan = PricingPlan {
    name: "Fabricode Core Platform",
    summary: "Includes base OS, tenancy controls, analytics, and automation engine.",
    badge: "Pilot",
    price_headline: "Free",
    price_qualifier: "for 6 months",
    price_followup: "Then $299 / month per active module",
    cta_label: "Start 6-Month Pilot",
    cta_href: REGISTER_HREF,
};

pub static PRICING_INCLUSIONS: &[&str] = &[
    "Unlimited tenants with granular access controls",
    "Real-time telemetry across weaving, dyeing, and logistics",
    "AI insights with anomaly detection",
    "API access to integrate with ERP and MES stacks",
    "Priority support with dedicated textile specialists",
];

// the module chips drawn in the about section illustration
pub fn about_chips() -> impl Iterator<Item = &'static str> {
    MODULES.iter().map(|module| module.name)
}
