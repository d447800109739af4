//! Safety requirement register.
//!
//! A fixed list of the clauses a tank design is checked against, grouped by
//! standard. Verification is a human activity; the register only records
//! what must be verified and whether an independent inspector signs off.

use std::fmt;

/// Standards and codes a tank design is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Standard {
    Sans10131,
    Api650,
    Iso9001,
    Sans1431,
    Sans9956,
    Sans9606,
}

impl Standard {
    /// Every standard, in report order.
    pub const ALL: [Self; 6] = [
        Self::Sans10131,
        Self::Api650,
        Self::Iso9001,
        Self::Sans1431,
        Self::Sans9956,
        Self::Sans9606,
    ];

    /// Citation as it appears in documents.
    #[must_use]
    pub fn citation(self) -> &'static str {
        match self {
            Self::Sans10131 => "SANS 10131:2004",
            Self::Api650 => "API 650",
            Self::Iso9001 => "ISO 9001",
            Self::Sans1431 => "SANS 1431",
            Self::Sans9956 => "SANS 9956-3",
            Self::Sans9606 => "SANS 9606-1",
        }
    }

    /// Full title of the standard.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Sans10131 => "Above-ground storage tanks for petroleum products",
            Self::Api650 => "Welded Steel Tanks for Oil Storage",
            Self::Iso9001 => "Quality Management Systems",
            Self::Sans1431 => "Carbon Steel Plate Specifications",
            Self::Sans9956 => "Welding Procedures",
            Self::Sans9606 => "Welder Qualifications",
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.citation())
    }
}

/// One clause of a standard that the design must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetyRequirement {
    pub standard: Standard,
    pub clause: &'static str,
    pub description: &'static str,
    pub verification_method: &'static str,
    pub inspector_required: bool,
}

const fn req(
    standard: Standard,
    clause: &'static str,
    description: &'static str,
    verification_method: &'static str,
    inspector_required: bool,
) -> SafetyRequirement {
    SafetyRequirement {
        standard,
        clause,
        description,
        verification_method,
        inspector_required,
    }
}

/// The full requirement register.
#[rustfmt::skip]
pub const SAFETY_REQUIREMENTS: [SafetyRequirement; 17] = [
    req(Standard::Sans10131, "4.1", "Bund wall construction and capacity", "Visual inspection and volume calculation", true),
    req(Standard::Sans10131, "4.2", "Safety distances per Tables 1, 2, 3", "Distance measurement and verification", true),
    req(Standard::Sans10131, "5.1", "Fire resistance requirements", "Fire authority consultation", true),
    req(Standard::Sans10131, "6.1", "Venting requirements per API 2000", "Vent sizing calculation", true),
    req(Standard::Sans10131, "A.4", "Pressure testing procedures", "Hydrostatic test performance", true),
    req(Standard::Api650, "5.3", "Shell plate thickness calculation", "Stress analysis verification", true),
    req(Standard::Api650, "5.7", "Shell joint requirements", "Welding procedure qualification", true),
    req(Standard::Api650, "5.10", "Nozzle reinforcement", "Reinforcement area calculation", true),
    req(Standard::Api650, "8.1", "Welding requirements", "Welder qualification verification", true),
    req(Standard::Iso9001, "7.1", "Quality planning", "Quality plan documentation", false),
    req(Standard::Iso9001, "7.5", "Documented information control", "Document control procedures", false),
    req(Standard::Iso9001, "8.1", "Operational planning and control", "Process control verification", false),
    req(Standard::Iso9001, "8.7", "Control of nonconforming outputs", "NCR system implementation", false),
    req(Standard::Sans1431, "6.1", "Chemical composition requirements", "Mill test certificate verification", true),
    req(Standard::Sans1431, "7.1", "Mechanical property requirements", "Tensile test verification", true),
    req(Standard::Sans9956, "5.1", "Welding procedure specification", "WPS qualification and approval", true),
    req(Standard::Sans9606, "4.1", "Welder qualification requirements", "Welder certification verification", true),
];

/// Returns the requirements for one standard, in register order.
pub fn for_standard(standard: Standard) -> impl Iterator<Item = &'static SafetyRequirement> {
    SAFETY_REQUIREMENTS
        .iter()
        .filter(move |r| r.standard == standard)
}

/// Returns the standards that have at least one requirement, in report order.
#[must_use]
pub fn covered_standards() -> Vec<Standard> {
    Standard::ALL
        .into_iter()
        .filter(|&s| for_standard(s).next().is_some())
        .collect()
}
