use super::element::Element;
use crate::common::constants::{AMU, EV};
use crate::common::elements::ElementIdentifier;
use crate::domain::{SrimError, SrimResult};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Projectile species with a kinetic energy [eV].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ion {
    element: Element,
    energy: f64,
}

impl Ion {
    pub fn new(identifier: impl Into<ElementIdentifier>, energy: f64) -> SrimResult<Self> {
        Self::from_element(Element::new(identifier)?, energy)
    }

    pub fn with_mass(
        identifier: impl Into<ElementIdentifier>,
        energy: f64,
        mass: f64,
    ) -> SrimResult<Self> {
        Self::from_element(Element::with_mass(identifier, mass)?, energy)
    }

    pub fn from_element(element: Element, energy: f64) -> SrimResult<Self> {
        if !(energy > 0.0) {
            return Err(SrimError::validation(
                "INPUT.ION_ENERGY",
                format!("ion energy {energy} eV cannot be 0.0 or less"),
            ));
        }
        Ok(Self { element, energy })
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn symbol(&self) -> &'static str {
        self.element.symbol()
    }

    pub fn mass(&self) -> f64 {
        self.element.mass()
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Non-relativistic velocity [m/s].
    pub fn velocity(&self) -> f64 {
        (2.0 * (self.energy * EV) / (self.element.mass() * AMU)).sqrt()
    }
}

impl Display for Ion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {} eV", self.element.symbol(), self.energy)
    }
}

#[cfg(test)]
mod tests {
    use super::Ion;
    use crate::domain::SrimErrorCategory;

    #[test]
    fn zero_and_negative_energies_are_rejected() {
        for energy in [0.0, -1.0, f64::NAN] {
            let error = Ion::new("Au", energy).expect_err("invalid energy");
            assert_eq!(error.category(), SrimErrorCategory::ValidationError);
            assert_eq!(error.code(), "INPUT.ION_ENERGY");
        }
    }

    #[test]
    fn velocity_uses_engine_unit_conversions() {
        let ion = Ion::new("Au", 1.0).expect("gold ion");
        let expected = 989.804_104_136_533_2;
        assert!((ion.velocity() - expected).abs() / expected < 1.0e-6);
    }

    #[test]
    fn equality_includes_energy() {
        let low = Ion::new("Ni", 1.0e6).expect("ni");
        let high = Ion::new("Ni", 2.0e6).expect("ni");
        assert_ne!(low, high);
        assert_eq!(low, Ion::new(28, 1.0e6).expect("ni by z"));
    }

    #[test]
    fn mass_override_changes_velocity() {
        let light = Ion::with_mass("Au", 1.0, 98.48).expect("light");
        let natural = Ion::new("Au", 1.0).expect("natural");
        assert!(light.velocity() > natural.velocity());
    }
}
