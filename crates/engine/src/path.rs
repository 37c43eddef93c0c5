use ebct_units::MeasurementKind;

/// The strategy that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComputationPath {
    /// Direct division of a stated bed volume by the flow rate.
    VolumeAndFlow,
    /// Cylinder volume from the first two lengths, divided by the flow rate.
    DimensionsAndFlow,
}

impl ComputationPath {
    /// Candidate paths in selection priority order. `VolumeAndFlow` is
    /// always attempted first; `DimensionsAndFlow` only when path 1's
    /// inputs are incomplete. The ordering is a tested contract.
    pub const PRIORITY: [Self; 2] = [Self::VolumeAndFlow, Self::DimensionsAndFlow];

    /// Human-readable tag surfaced as `via`.
    #[must_use]
    pub const fn via(self) -> &'static str {
        match self {
            Self::VolumeAndFlow => "volume+flow",
            Self::DimensionsAndFlow => "dims+flow (assume cylinder)",
        }
    }

    /// Literal formula template surfaced as `formula`.
    #[must_use]
    pub const fn formula(self) -> &'static str {
        match self {
            Self::VolumeAndFlow => "EBCT(min) = Volume(gal) / Flow(gal/min)",
            Self::DimensionsAndFlow => {
                "V(ft³)=π*(D/2)²*H; EBCT(min)=V(gal)/Flow(gpm); 1 ft³=7.48052 gal"
            }
        }
    }

    /// Measurement kinds this path requires. `DimensionsAndFlow` needs two
    /// measurements of the `Length` kind.
    #[must_use]
    pub const fn required_kinds(self) -> &'static [MeasurementKind] {
        match self {
            Self::VolumeAndFlow => &[MeasurementKind::Volume, MeasurementKind::Flow],
            Self::DimensionsAndFlow => &[MeasurementKind::Length, MeasurementKind::Flow],
        }
    }
}

#[cfg(test)]
mod tests {
    use ebct_units::MeasurementKind;

    use super::ComputationPath;

    #[test]
    fn volume_path_is_first_priority() {
        assert_eq!(
            ComputationPath::PRIORITY,
            [
                ComputationPath::VolumeAndFlow,
                ComputationPath::DimensionsAndFlow,
            ]
        );
    }

    #[test]
    fn tags_and_formulas_are_the_documented_literals() {
        assert_eq!(ComputationPath::VolumeAndFlow.via(), "volume+flow");
        assert_eq!(
            ComputationPath::DimensionsAndFlow.via(),
            "dims+flow (assume cylinder)"
        );
        assert_eq!(
            ComputationPath::VolumeAndFlow.formula(),
            "EBCT(min) = Volume(gal) / Flow(gal/min)"
        );
    }

    #[test]
    fn every_path_requires_flow() {
        for path in ComputationPath::PRIORITY {
            assert!(path.required_kinds().contains(&MeasurementKind::Flow));
        }
    }
}
