use super::material::{Material, Phase};
use crate::domain::{SrimError, SrimResult};
use serde::Serialize;

/// Slab of one material with a width [Angstrom].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    material: Material,
    width: f64,
    name: String,
}

impl Layer {
    pub fn new(material: Material, width: f64) -> SrimResult<Self> {
        let name = material.chemical_formula();
        Self::with_name(material, width, name)
    }

    pub fn with_name(material: Material, width: f64, name: impl Into<String>) -> SrimResult<Self> {
        if !(width > 0.0) {
            return Err(SrimError::validation(
                "INPUT.LAYER_WIDTH",
                format!("layer width must be positive, got {width}"),
            ));
        }
        Ok(Self {
            material,
            width,
            name: name.into(),
        })
    }

    pub fn from_formula(formula: &str, density: f64, width: f64, phase: Phase) -> SrimResult<Self> {
        Self::new(Material::from_formula(formula, density, phase)?, width)
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered stack of layers along the beam axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Target {
    layers: Vec<Layer>,
}

impl Target {
    pub fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Total width, the sum of all layer widths.
    pub fn width(&self) -> f64 {
        self.layers.iter().map(Layer::width).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::{Layer, Target};
    use crate::domain::SrimErrorCategory;
    use crate::materials::{Material, Phase};

    #[test]
    fn layer_name_defaults_to_formula() {
        let layer = Layer::from_formula("SiC", 3.21, 1.0e4, Phase::Solid).expect("layer");
        assert_eq!(layer.name(), "Si 0.50 C 0.50");
        assert_eq!(layer.width(), 1.0e4);
        assert_eq!(layer.material().density(), 3.21);

        let named = Layer::with_name(layer.material().clone(), 10.0, "substrate").expect("named");
        assert_eq!(named.name(), "substrate");
    }

    #[test]
    fn layer_width_must_be_positive() {
        let material = Material::from_formula("Au", 19.3, Phase::Solid).expect("gold");
        for width in [0.0, -1.0] {
            let error = Layer::new(material.clone(), width).expect_err("bad width");
            assert_eq!(error.category(), SrimErrorCategory::ValidationError);
        }
    }

    #[test]
    fn target_width_is_sum_of_layers() {
        let first = Layer::from_formula("Ni99Fe1", 1.0, 1.0, Phase::Solid).expect("first");
        let second = Layer::from_formula("Au", 1.0, 2.0, Phase::Solid).expect("second");

        assert_eq!(Target::new(vec![first.clone(), second]).width(), 3.0);
        assert_eq!(Target::new(vec![first]).width(), 1.0);
        assert_eq!(Target::new(Vec::new()).width(), 0.0);
        assert!(Target::default().is_empty());
    }

    #[test]
    fn layer_order_is_preserved() {
        let top = Layer::from_formula("Au", 19.3, 100.0, Phase::Solid).expect("top");
        let bottom = Layer::from_formula("Si", 2.33, 1.0e4, Phase::Solid).expect("bottom");
        let target = Target::new(vec![top, bottom]);

        assert_eq!(target.len(), 2);
        assert_eq!(target.layers()[0].name(), "Au 1.00");
        assert_eq!(target.layers()[1].name(), "Si 1.00");
    }
}
