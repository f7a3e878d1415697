use crate::chart::{ChartData, Dataset, Rgba};
use crate::content::{ContentCatalog, ContentEntry};
use crate::nav::NavLink;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Where poll votes are counted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PollBackend {
    /// `localStorage` of this browser only.
    Local,
    /// A shared tally document served over HTTP.
    Remote { endpoint: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollConfig {
    pub voted_key: String,
    pub results_key: String,
    pub backend: PollBackend,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            voted_key: "votedInPoll".to_string(),
            results_key: "pollResults".to_string(),
            backend: PollBackend::Local,
        }
    }
}

impl PollConfig {
    pub fn remote() -> Self {
        Self {
            backend: PollBackend::Remote {
                endpoint: format!("{}/api/poll", get_backend_url()),
            },
            ..Self::default()
        }
    }
}

/// Everything a page variant needs, built once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub nav_links: &'static [NavLink],
    /// Fraction of a section that must be visible before its nav link lights up.
    pub nav_threshold: f64,
    pub components: ContentCatalog,
    pub flow: ContentCatalog,
    pub chart: ChartData,
    pub poll: Option<PollConfig>,
}

impl PageConfig {
    /// The full page, poll included.
    pub fn full() -> Self {
        Self {
            nav_links: FULL_NAV,
            poll: Some(PollConfig::default()),
            ..Self::overview()
        }
    }

    /// The same page without the poll section.
    pub fn overview() -> Self {
        Self {
            nav_links: OVERVIEW_NAV,
            nav_threshold: 0.4,
            components: ContentCatalog::new(COMPONENT_DETAILS),
            flow: ContentCatalog::new(FLOW_DETAILS),
            chart: benefits_chart(),
            poll: None,
        }
    }
}

const OVERVIEW_NAV: &[NavLink] = &[
    NavLink::new("#intro", "Introduction"),
    NavLink::new("#components", "Components"),
    NavLink::new("#flow", "Workflow"),
    NavLink::new("#benefits", "Benefits"),
];

const FULL_NAV: &[NavLink] = &[
    NavLink::new("#intro", "Introduction"),
    NavLink::new("#components", "Components"),
    NavLink::new("#flow", "Workflow"),
    NavLink::new("#benefits", "Benefits"),
    NavLink::new("#poll", "Poll"),
];

const COMPONENT_DETAILS: &[ContentEntry] = &[
    ContentEntry {
        key: "ui",
        title: "UI & User Flows",
        text: "This section translates visual designs (e.g., from Figma) into a structured definition. It includes a component library, state variations (e.g., loading, error, empty), and strict user flow logic. For example, it defines that from the \"Login\" screen, a successful authentication must always lead to the \"Dashboard\".",
    },
    ContentEntry {
        key: "data",
        title: "Data & State Models",
        text: "Defines the `shape` of all client-side data. It specifies types, required fields, and validation rules (e.g., an email must match a specific regex). This ensures data integrity and consistency throughout the application, preventing common bugs related to unexpected data structures.",
    },
    ContentEntry {
        key: "api",
        title: "API Contracts",
        text: "This serves as a client-side mirror of the backend API documentation (like OpenAPI/Swagger). It details every endpoint, the exact structure of request and response bodies, HTTP methods, and all possible success and error codes. Development can proceed using mock data that adheres to this contract.",
    },
    ContentEntry {
        key: "logic",
        title: "Business & Domain Logic",
        text: "This captures complex rules that are central to the product's value. For example, in an e-commerce app, this section would define the rules for calculating shipping costs, applying discounts, and handling inventory logic. This logic is specified independently of any UI representation.",
    },
    ContentEntry {
        key: "auth",
        title: "Permissions & Roles",
        text: "Clearly defines user roles (e.g., Admin, Editor, Viewer) and maps them to specific actions or visible UI elements. For instance, it would state that only users with the \"Admin\" role can see the \"Delete User\" button. This prevents security holes and clarifies functionality for different user types.",
    },
    ContentEntry {
        key: "non-functional",
        title: "Non-Functional Specs",
        text: "Covers critical requirements that aren't direct features. This includes performance budgets (e.g., \"page load must be under 2 seconds\"), accessibility standards (e.g., \"must be WCAG 2.1 AA compliant\"), and security protocols (e.g., \"all user input must be sanitized to prevent XSS\").",
    },
];

const FLOW_DETAILS: &[ContentEntry] = &[
    ContentEntry {
        key: "inputs",
        title: "Inputs: PRD & Figma",
        text: "Product Requirement Documents (PRDs) define the \"why\" and \"what\" of a feature. Figma (or other design tools) provides the visual and user experience blueprint. These are the conceptual sources for the spec.",
    },
    ContentEntry {
        key: "spec",
        title: "The Code Spec",
        text: "The central artifact. It synthesizes the requirements and designs into a detailed, unambiguous technical plan. It becomes the single source of truth that engineers build against. It is version-controlled alongside the code.",
    },
    ContentEntry {
        key: "code",
        title: "Production Code",
        text: "The final implementation. Because it is built directly from the spec, it accurately reflects the initial requirements and design. The spec serves as a reference for code reviews, testing, and future modifications.",
    },
];

fn benefits_chart() -> ChartData {
    ChartData {
        labels: &[
            "Developer Onboarding Time",
            "Feature Clarity",
            "Cross-Team Misalignment",
            "Bugs from Ambiguity",
        ],
        before: Dataset {
            label: "Before Spec (Lower is Better for Time/Bugs)",
            values: &[100, 40, 80, 75],
            fill: Rgba::new(200, 150, 150, 0.6),
            border: Rgba::new(200, 150, 150, 1.0),
        },
        after: Dataset {
            label: "After Spec (Higher is Better for Clarity)",
            values: &[30, 95, 20, 15],
            fill: Rgba::new(217, 119, 6, 0.6),
            border: Rgba::new(217, 119, 6, 1.0),
        },
    }
}
