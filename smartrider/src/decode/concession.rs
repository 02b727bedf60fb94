// smartrider-rs/smartrider/src/decode/concession.rs

use std::fmt;

/// Fare concession category encoded by the card's token byte.
///
/// The mapping is total: codes without a known category map to
/// [`Concession::Unknown`] carrying the raw code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Concession {
    /// 0x00 - card not yet issued.
    PreIssue,
    /// 0x01 - full fare.
    StandardFare,
    /// 0x02 - school student.
    Student,
    /// 0x04 - tertiary student.
    Tertiary,
    /// 0x06 - seniors.
    Seniors,
    /// 0x07 - health care card holder.
    HealthCare,
    /// 0x0e - transit authority staff.
    Staff,
    /// 0x0f - pensioner.
    Pensioner,
    /// 0x10 - free travel entitlement.
    FreeTravel,
    /// Any code without a known category.
    Unknown(u8),
}

impl Concession {
    /// Map a token byte to its category.
    pub const fn from_code(code: u8) -> Self {
        match code {
            0x00 => Concession::PreIssue,
            0x01 => Concession::StandardFare,
            0x02 => Concession::Student,
            0x04 => Concession::Tertiary,
            0x06 => Concession::Seniors,
            0x07 => Concession::HealthCare,
            0x0e => Concession::Staff,
            0x0f => Concession::Pensioner,
            0x10 => Concession::FreeTravel,
            other => Concession::Unknown(other),
        }
    }

    /// The raw token byte for a known category, or the carried code.
    pub const fn code(&self) -> u8 {
        match self {
            Concession::PreIssue => 0x00,
            Concession::StandardFare => 0x01,
            Concession::Student => 0x02,
            Concession::Tertiary => 0x04,
            Concession::Seniors => 0x06,
            Concession::HealthCare => 0x07,
            Concession::Staff => 0x0e,
            Concession::Pensioner => 0x0f,
            Concession::FreeTravel => 0x10,
            Concession::Unknown(code) => *code,
        }
    }

    /// Human-readable label, never empty.
    pub const fn label(&self) -> &'static str {
        match self {
            Concession::PreIssue => "Pre-issue",
            Concession::StandardFare => "Standard Fare",
            Concession::Student => "Student",
            Concession::Tertiary => "Tertiary",
            Concession::Seniors => "Seniors",
            Concession::HealthCare => "Health Care",
            Concession::Staff => "Staff",
            Concession::Pensioner => "Pensioner",
            Concession::FreeTravel => "Free Travel",
            Concession::Unknown(_) => "Unknown",
        }
    }
}

impl fmt::Display for Concession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
