use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::fractals::colour_mapping::{
    kinds::ColourSchemeKinds,
    maps::{banded_gradient::BandedGradient, smooth_spectrum::SmoothSpectrum},
};

#[must_use]
pub fn colour_map_factory(kind: ColourSchemeKinds) -> Box<dyn ColourMap> {
    match kind {
        ColourSchemeKinds::SmoothSpectrum => Box::new(SmoothSpectrum::new()),
        ColourSchemeKinds::BandedGradient => Box::new(BandedGradient::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            ColourSchemeKinds::ALL.first(),
            Some(&ColourSchemeKinds::default())
        );
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in ColourSchemeKinds::ALL {
            let map = colour_map_factory(kind);
            assert_eq!(map.kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in ColourSchemeKinds::ALL {
            let map = colour_map_factory(kind);
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = ColourSchemeKinds::ALL
            .iter()
            .map(|k| k.display_name())
            .collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
