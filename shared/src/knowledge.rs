//! Built-in guidance for each crack category, shown next to annotated images.

/// Label the classifier uses for anything that is neither horizontal nor
/// vertical. The spelling matches what the server emits.
pub const UNPRECEDENTED_LABEL: &str = "Unprecidented Crack";

#[derive(Debug, PartialEq, Eq)]
pub struct CrackKnowledge {
    pub name: &'static str,
    pub severity: &'static str,
    pub urgency: &'static str,
    pub causes: &'static [&'static str],
    pub solutions: &'static [&'static str],
    pub prevention: &'static [&'static str],
}

static HORIZONTAL: CrackKnowledge = CrackKnowledge {
    name: "Horizontal Crack",
    severity: "Critical",
    urgency: "Immediate Attention Required",
    causes: &[
        "Settlement of foundation due to poor soil conditions",
        "Thermal expansion and contraction cycles",
        "Inadequate reinforcement in structural elements",
        "Poor construction practices during foundation laying",
    ],
    solutions: &[
        "Inject epoxy resin or polyurethane for crack sealing",
        "Install underpinning or micro-piles for foundation support",
        "Apply external strengthening using carbon fiber reinforced polymer (CFRP)",
        "Implement proper drainage systems to manage water infiltration",
    ],
    prevention: &[
        "Conduct thorough soil investigation before construction",
        "Use appropriate foundation design based on soil conditions",
        "Install expansion joints at regular intervals",
        "Implement proper curing practices during construction",
    ],
};

static VERTICAL: CrackKnowledge = CrackKnowledge {
    name: "Vertical Crack",
    severity: "Medium to High",
    urgency: "Moderate Action Required",
    causes: &[
        "Thermal movement due to temperature variations",
        "Drying shrinkage of concrete during curing process",
        "Uneven loading or stress concentration",
        "Poor quality concrete mix or inadequate curing",
    ],
    solutions: &[
        "Apply flexible sealants for minor crack repair",
        "Use crack injection methods with epoxy or acrylic materials",
        "Install movement joints to accommodate thermal expansion",
        "Apply protective coatings to prevent water ingress",
    ],
    prevention: &[
        "Use proper concrete mix design with adequate water-cement ratio",
        "Implement controlled curing procedures",
        "Install expansion and contraction joints appropriately",
        "Apply protective surface treatments to reduce temperature effects",
    ],
};

static UNPRECEDENTED: CrackKnowledge = CrackKnowledge {
    name: "Unprecedented Crack",
    severity: "High",
    urgency: "Prompt Investigation Required",
    causes: &[
        "Unusual loading conditions or structural overload",
        "Environmental factors such as ground movement or seismic activity",
        "Material deterioration due to chemical attack or corrosion",
        "Design deficiencies or construction errors",
    ],
    solutions: &[
        "Conduct detailed structural assessment by qualified engineer",
        "Implement temporary structural support if necessary",
        "Apply appropriate repair methods based on assessment findings",
        "Monitor crack progression with regular measurements",
    ],
    prevention: &[
        "Regular structural inspections and maintenance",
        "Proper load management and usage control",
        "Environmental protection measures",
        "Quality control during construction and material selection",
    ],
};

/// Lowercases and collapses whitespace so `"  Horizontal   crack"` and
/// `"horizontal crack"` share a key.
pub fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Guidance for a classifier label. Unknown labels get the unprecedented entry.
pub fn lookup(label: &str) -> &'static CrackKnowledge {
    match normalize_label(label).as_str() {
        "horizontal crack" => &HORIZONTAL,
        "vertical crack" => &VERTICAL,
        _ => &UNPRECEDENTED,
    }
}

/// Colour family of a classification badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryColor {
    Red,
    Blue,
    Purple,
    Neutral,
}

impl CategoryColor {
    pub fn for_label(label: &str) -> Self {
        match label {
            "Horizontal Crack" => CategoryColor::Red,
            "Vertical Crack" => CategoryColor::Blue,
            UNPRECEDENTED_LABEL => CategoryColor::Purple,
            _ => CategoryColor::Neutral,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            CategoryColor::Red => "badge-red",
            CategoryColor::Blue => "badge-blue",
            CategoryColor::Purple => "badge-purple",
            CategoryColor::Neutral => "badge-neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTone {
    Critical,
    High,
    Elevated,
    Other,
}

impl SeverityTone {
    pub fn for_severity(severity: &str) -> Self {
        match severity.trim().to_lowercase().as_str() {
            "critical" => SeverityTone::Critical,
            "high" => SeverityTone::High,
            "medium to high" => SeverityTone::Elevated,
            _ => SeverityTone::Other,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SeverityTone::Critical => "severity-critical",
            SeverityTone::High => "severity-high",
            SeverityTone::Elevated => "severity-elevated",
            SeverityTone::Other => "severity-other",
        }
    }
}
