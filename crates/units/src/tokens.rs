//! Typed unit tokens.
//!
//! Parsing a token string into one of these enums is the single place unit
//! spellings are interpreted; everything past this point works with typed
//! variants. Tokens are expected case-folded (the extractor lowercases what
//! it matched).

/// A recognized flow-rate unit token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowUnit {
    /// `gpm`
    Gpm,
    /// `l/min` or `lpm`
    LitersPerMinute,
    /// `m3/h` or `m³/h`
    CubicMetersPerHour,
}

impl FlowUnit {
    /// Parse a case-folded token. Returns `None` for anything outside the
    /// supported set.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "gpm" => Some(Self::Gpm),
            "l/min" | "lpm" => Some(Self::LitersPerMinute),
            "m3/h" | "m³/h" => Some(Self::CubicMetersPerHour),
            _ => None,
        }
    }
}

/// A recognized volume unit token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeUnit {
    /// `gal`
    Gallons,
    /// `ft3` or `ft³`
    CubicFeet,
    /// `m3` or `m³`
    CubicMeters,
}

impl VolumeUnit {
    /// Parse a case-folded token. Returns `None` for anything outside the
    /// supported set.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "gal" => Some(Self::Gallons),
            "ft3" | "ft³" => Some(Self::CubicFeet),
            "m3" | "m³" => Some(Self::CubicMeters),
            _ => None,
        }
    }
}

/// A recognized length unit token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// `ft`
    Feet,
    /// `in`
    Inches,
    /// `m`
    Meters,
}

impl LengthUnit {
    /// Parse a case-folded token. Returns `None` for anything outside the
    /// supported set.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "ft" => Some(Self::Feet),
            "in" => Some(Self::Inches),
            "m" => Some(Self::Meters),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FlowUnit, LengthUnit, VolumeUnit};

    #[test]
    fn flow_tokens_parse_to_shared_variants() {
        assert_eq!(FlowUnit::from_token("l/min"), Some(FlowUnit::LitersPerMinute));
        assert_eq!(FlowUnit::from_token("lpm"), Some(FlowUnit::LitersPerMinute));
        assert_eq!(
            FlowUnit::from_token("m³/h"),
            Some(FlowUnit::CubicMetersPerHour)
        );
        assert_eq!(
            FlowUnit::from_token("m3/h"),
            Some(FlowUnit::CubicMetersPerHour)
        );
        assert_eq!(FlowUnit::from_token("cfm"), None);
    }

    #[test]
    fn volume_tokens_accept_both_cubic_spellings() {
        assert_eq!(VolumeUnit::from_token("ft³"), Some(VolumeUnit::CubicFeet));
        assert_eq!(VolumeUnit::from_token("ft3"), Some(VolumeUnit::CubicFeet));
        assert_eq!(VolumeUnit::from_token("liter"), None);
    }

    #[test]
    fn length_tokens() {
        assert_eq!(LengthUnit::from_token("ft"), Some(LengthUnit::Feet));
        assert_eq!(LengthUnit::from_token("in"), Some(LengthUnit::Inches));
        assert_eq!(LengthUnit::from_token("m"), Some(LengthUnit::Meters));
        assert_eq!(LengthUnit::from_token("cm"), None);
    }
}
