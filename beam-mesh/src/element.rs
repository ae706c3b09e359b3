//! A beam element placed in the scene
//!
//! Ties the property table, the section builders and the deflection solver
//! together for one beam. The element knows its endpoints in scene units and
//! its joint positions in analysis units; the ratio between the two lengths
//! converts every table dimension and displacement into scene units.

use std::sync::Arc;

use log::debug;

use crate::cache::{MeshCache, SectionKey};
use crate::config::DisplayOptions;
use crate::deflection::{DeflectionShape, DeflectionSolver};
use crate::error::{MeshError, MeshResult};
use crate::math::{SectionFrame, Vec3, GEOMETRY_TOLERANCE};
use crate::mesh::Mesh;
use crate::properties::{ElementProperties, PropertyTable};
use crate::sections::{SectionSpec, ShapeFamily};

/// Material and shape whose size list a built-up W indexes into
const BUILT_UP_BASE_MATERIAL: &str = "Steel";
const BUILT_UP_BASE_SHAPE: &str = "W";

/// Everything needed to render one beam for a chosen section
#[derive(Debug, Clone)]
pub struct ElementDisplay {
    pub key: SectionKey,
    pub mesh: Arc<Mesh>,
    pub deflection: DeflectionShape,
    /// Largest vertical deflection in analysis units
    pub max_deflection: f64,
    pub utilization: f64,
}

#[derive(Debug, Clone)]
pub struct BeamElement {
    point1: Vec3,
    point2: Vec3,
    joint_i: Vec3,
    joint_j: Vec3,
    options: DisplayOptions,
}

impl BeamElement {
    /// # Arguments
    /// * `point1`, `point2` - Beam endpoints in scene axes
    /// * `joint_i`, `joint_j` - Joint positions in analysis axes
    pub fn new(point1: Vec3, point2: Vec3, joint_i: Vec3, joint_j: Vec3) -> MeshResult<Self> {
        if (point2 - point1).norm() < GEOMETRY_TOLERANCE {
            return Err(MeshError::DegenerateBeam(
                "scene endpoints coincide".to_string(),
            ));
        }
        if (joint_j - joint_i).norm() < GEOMETRY_TOLERANCE {
            return Err(MeshError::DegenerateBeam(
                "analysis joints coincide".to_string(),
            ));
        }

        Ok(Self {
            point1,
            point2,
            joint_i,
            joint_j,
            options: DisplayOptions::default(),
        })
    }

    pub fn with_options(mut self, options: DisplayOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    pub fn point1(&self) -> Vec3 {
        self.point1
    }

    pub fn point2(&self) -> Vec3 {
        self.point2
    }

    /// Scene length per analysis length unit
    pub fn unit_scale(&self) -> f64 {
        (self.point2 - self.point1).norm() / (self.joint_j - self.joint_i).norm()
    }

    /// Cross-section axes for this beam
    pub fn section_frame(&self) -> MeshResult<SectionFrame> {
        SectionFrame::between(&self.point1, &self.point2)
    }

    /// Section dimensions for a table entry, in scene units
    pub fn section_spec(
        &self,
        material: &str,
        shape: &str,
        size: &str,
        table: &PropertyTable,
    ) -> MeshResult<SectionSpec> {
        let family = ShapeFamily::from_label(shape)?;
        let props = table.element(material, shape, size)?;
        let scale = self.unit_scale();

        let dims: Vec<f64> = match family {
            ShapeFamily::WideFlange => scaled(&props, shape, size, 0..4, scale)?,
            ShapeFamily::Hss => scaled(&props, shape, size, 0..3, scale)?,
            ShapeFamily::Plate => scaled(&props, shape, size, 0..2, scale)?,
            ShapeFamily::BuiltUpW => {
                let base_size = built_up_base_size(&props, shape, size, table)?;
                let base = table.element(BUILT_UP_BASE_MATERIAL, BUILT_UP_BASE_SHAPE, base_size)?;

                let mut dims = scaled(&base, BUILT_UP_BASE_SHAPE, base_size, 0..4, scale)?;
                dims.push(props.dimension(shape, size, 1)? * scale);
                dims
            }
        };

        SectionSpec::from_dims(family, &dims, self.options.hss_curve_points)
    }

    /// Generate the section mesh for a table entry
    pub fn build_mesh(
        &self,
        material: &str,
        shape: &str,
        size: &str,
        table: &PropertyTable,
    ) -> MeshResult<Mesh> {
        let spec = self.section_spec(material, shape, size, table)?;
        spec.build(self.point1, self.point2)
    }

    /// Deflected shape from a decoded property row
    pub fn deflection(&self, props: &ElementProperties) -> MeshResult<DeflectionShape> {
        DeflectionSolver::new(
            self.point1,
            self.point2,
            self.joint_i,
            self.joint_j,
            props.deflection,
            self.options.vertical_deflection_scale,
            self.options.deflection_points,
            self.unit_scale(),
        )
        .solve()
    }

    /// Mesh, deflected shape and ratios for a table entry. The mesh comes
    /// from `cache` when this element already generated it.
    pub fn display(
        &self,
        material: &str,
        shape: &str,
        size: &str,
        table: &PropertyTable,
        cache: &mut MeshCache,
    ) -> MeshResult<ElementDisplay> {
        self.options.validate()?;
        let props = table.element(material, shape, size)?;
        let deflection = self.deflection(&props)?;

        let key = SectionKey::new(material, shape, size);
        let mesh = cache.get_or_try_insert_with(&key, || self.build_mesh(material, shape, size, table))?;

        debug!(
            "{} {} {}: utilization {:.3}, max deflection {:.4}",
            material, shape, size, props.utilization, deflection.max_deflection
        );
        Ok(ElementDisplay {
            key,
            mesh,
            max_deflection: deflection.max_deflection,
            deflection,
            utilization: props.utilization,
        })
    }
}

fn scaled(
    props: &ElementProperties,
    shape: &str,
    size: &str,
    range: std::ops::Range<usize>,
    scale: f64,
) -> MeshResult<Vec<f64>> {
    range
        .map(|i| Ok(props.dimension(shape, size, i)? * scale))
        .collect()
}

/// The first dimension of a built-up row is a position in the base W size
/// list
fn built_up_base_size<'a>(
    props: &ElementProperties,
    shape: &str,
    size: &str,
    table: &'a PropertyTable,
) -> MeshResult<&'a str> {
    let raw = props.dimension(shape, size, 0)?;
    let sizes = table.sizes(BUILT_UP_BASE_MATERIAL, BUILT_UP_BASE_SHAPE)?;

    if !raw.is_finite() || raw < 0.0 || raw as usize >= sizes.len() {
        return Err(MeshError::InvalidInput(format!(
            "{shape} '{size}' refers to W size {raw}, but only {} exist",
            sizes.len()
        )));
    }
    Ok(sizes[raw as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TABLE: &str = "\
Material,Shape,Size
Steel,W,W12x26,0,0,0,0,0,0,0,0,-0.5,0.001,0,0,0.82,6.49,12.2,0.38,0.23
Steel,W,W14x30,0,0,0,0,0,0,0,0,-0.3,0.001,0,0,0.64,6.73,13.8,0.385,0.27
Steel,HSS,HSS6x6x1/4,0,0,0,0,0,0,0,0,-0.4,0.002,0,0,0.91,6,6,0.233
Steel,PL,PL6x1/2,0,0,0,0,0,0,0,0,-0.9,0,0,0,1.2,6,0.5
Steel,Built up I Beam,W14x30+PL1/2,0,0,0,0,0,0,0,0,-0.2,0.001,0,0,0.55,1,0.5
Steel,Built up I Beam,Bad,0,0,0,0,0,0,0,0,-0.2,0.001,0,0,0.55,7,0.5
Steel,C,C8x11.5,0,0,0,0,0,0,0,0,-0.2,0.001,0,0,0.55,2.26,8
";

    fn table() -> PropertyTable {
        PropertyTable::parse(TABLE).unwrap()
    }

    fn element() -> BeamElement {
        BeamElement::new(
            Vec3::zeros(),
            Vec3::new(0.0, 0.0, -10.0),
            Vec3::zeros(),
            Vec3::new(0.0, 100.0, 0.0),
        )
        .unwrap()
    }

    #[test]
    fn test_unit_scale() {
        assert_relative_eq!(element().unit_scale(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_coincident_points() {
        let result = BeamElement::new(Vec3::zeros(), Vec3::zeros(), Vec3::zeros(), Vec3::y());
        assert!(matches!(result, Err(MeshError::DegenerateBeam(_))));

        let result = BeamElement::new(Vec3::zeros(), Vec3::z(), Vec3::y(), Vec3::y());
        assert!(matches!(result, Err(MeshError::DegenerateBeam(_))));
    }

    #[test]
    fn test_wide_flange_spec_is_scaled() {
        let spec = element().section_spec("Steel", "W", "W12x26", &table()).unwrap();
        match spec {
            SectionSpec::WideFlange(d) => {
                assert_relative_eq!(d.width, 0.649, epsilon = 1e-12);
                assert_relative_eq!(d.depth, 1.22, epsilon = 1e-12);
                assert_relative_eq!(d.flange_thickness, 0.038, epsilon = 1e-12);
                assert_relative_eq!(d.web_thickness, 0.023, epsilon = 1e-12);
            }
            other => panic!("expected W, got {other:?}"),
        }
    }

    #[test]
    fn test_hss_uses_configured_curve_points() {
        let element = element().with_options(DisplayOptions::default().with_hss_curve_points(5));
        let spec = element.section_spec("Steel", "HSS", "HSS6x6x1/4", &table()).unwrap();
        match spec {
            SectionSpec::Hss(d) => {
                assert_eq!(d.curve_points, 5);
                assert_relative_eq!(d.wall_thickness, 0.0233, epsilon = 1e-12);
            }
            other => panic!("expected HSS, got {other:?}"),
        }
    }

    #[test]
    fn test_built_up_uses_indexed_w() {
        let spec = element()
            .section_spec("Steel", "Built up I Beam", "W14x30+PL1/2", &table())
            .unwrap();
        match spec {
            SectionSpec::BuiltUpW(d) => {
                // Index 1 in the Steel W list is W14x30
                assert_relative_eq!(d.beam.depth, 1.38, epsilon = 1e-12);
                assert_relative_eq!(d.plate_height, 0.05, epsilon = 1e-12);
            }
            other => panic!("expected built-up W, got {other:?}"),
        }
    }

    #[test]
    fn test_built_up_index_out_of_range() {
        let result = element().section_spec("Steel", "Built up I Beam", "Bad", &table());
        assert!(matches!(result, Err(MeshError::InvalidInput(_))));
    }

    #[test]
    fn test_unknown_shape() {
        let result = element().section_spec("Steel", "C", "C8x11.5", &table());
        assert!(matches!(result, Err(MeshError::UnknownShape(_))));
    }

    #[test]
    fn test_display_reuses_cached_mesh() {
        let table = table();
        let element = element();
        let mut cache = MeshCache::new();

        let first = element.display("Steel", "PL", "PL6x1/2", &table, &mut cache).unwrap();
        let second = element.display("Steel", "PL", "PL6x1/2", &table, &mut cache).unwrap();

        assert!(Arc::ptr_eq(&first.mesh, &second.mesh));
        assert_eq!(cache.len(), 1);
        assert_eq!(first.mesh.name(), "Plate Mesh");
        assert_relative_eq!(first.utilization, 1.2);
        assert_relative_eq!(first.max_deflection, 0.9, epsilon = 1e-12);
        assert_eq!(first.deflection.points.len(), 11);
    }

    #[test]
    fn test_display_miss_leaves_cache_empty() {
        let mut cache = MeshCache::new();
        let result = element().display("Steel", "W", "W99x999", &table(), &mut cache);
        assert!(matches!(result, Err(MeshError::SizeNotFound { .. })));
        assert!(cache.is_empty());
    }
}
