#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourSchemeKinds {
    #[default]
    SmoothSpectrum,
    BandedGradient,
}

impl ColourSchemeKinds {
    pub const ALL: &'static [Self] = &[Self::SmoothSpectrum, Self::BandedGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SmoothSpectrum => "Smooth spectrum",
            Self::BandedGradient => "Banded gradient",
        }
    }
}

impl std::fmt::Display for ColourSchemeKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
