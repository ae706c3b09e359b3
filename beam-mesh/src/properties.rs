//! Element property table keyed by material, shape and size
//!
//! The table is comma-separated text. A row whose first cell is `Material` is
//! a header and is skipped. Every other row reads
//!
//! ```text
//! material, shape, size, v0, v1, v2, ...
//! ```
//!
//! where values run until the first empty cell. Values 0-11 are the end
//! deflections and rotations from the analysis, value 12 the utilization
//! ratio and values 13 onward the section dimensions.

use std::collections::HashMap;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::deflection::DeflectionInput;
use crate::error::{MeshError, MeshResult};

/// Index of the utilization ratio in a property row
pub const UTILIZATION_INDEX: usize = 12;

/// Index of the first section dimension in a property row
pub const DIMENSIONS_START: usize = 13;

/// One row of the property table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRow {
    pub material: String,
    pub shape: String,
    pub size: String,
    pub values: Vec<f64>,
}

/// Property rows in file order with lookup by key
#[derive(Debug, Clone, Default)]
pub struct PropertyTable {
    rows: Vec<PropertyRow>,
    index: HashMap<(String, String, String), usize>,
}

impl PropertyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse table text
    pub fn parse(text: &str) -> MeshResult<Self> {
        let mut table = Self::new();

        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let cells: Vec<&str> = line.split(',').map(str::trim).collect();
            if cells[0] == "Material" {
                continue;
            }
            if cells.len() < 3 || cells[..3].iter().any(|c| c.is_empty()) {
                return Err(MeshError::Parse {
                    line: line_no + 1,
                    message: "expected material, shape and size".to_string(),
                });
            }

            let values = cells[3..]
                .iter()
                .take_while(|c| !c.is_empty())
                .map(|c| {
                    c.parse::<f64>().map_err(|e| MeshError::Parse {
                        line: line_no + 1,
                        message: format!("invalid value '{c}': {e}"),
                    })
                })
                .collect::<MeshResult<Vec<f64>>>()?;

            table.insert(PropertyRow {
                material: cells[0].to_string(),
                shape: cells[1].to_string(),
                size: cells[2].to_string(),
                values,
            });
        }

        info!("loaded {} element property rows", table.len());
        Ok(table)
    }

    /// Read and parse a table file
    pub fn from_path(path: impl AsRef<Path>) -> MeshResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Add a row. A row with an existing key replaces its values in place.
    pub fn insert(&mut self, row: PropertyRow) {
        let key = (row.material.clone(), row.shape.clone(), row.size.clone());
        match self.index.get(&key) {
            Some(&i) => {
                debug!("replacing properties for {} {} {}", key.0, key.1, key.2);
                self.rows[i] = row;
            }
            None => {
                self.index.insert(key, self.rows.len());
                self.rows.push(row);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[PropertyRow] {
        &self.rows
    }

    /// Materials in first-seen order
    pub fn materials(&self) -> Vec<&str> {
        unique(self.rows.iter().map(|r| r.material.as_str()))
    }

    /// Shapes for a material in first-seen order
    pub fn shapes(&self, material: &str) -> MeshResult<Vec<&str>> {
        let shapes = unique(
            self.rows
                .iter()
                .filter(|r| r.material == material)
                .map(|r| r.shape.as_str()),
        );
        if shapes.is_empty() {
            return Err(MeshError::MaterialNotFound(material.to_string()));
        }
        Ok(shapes)
    }

    /// Sizes for a material and shape in first-seen order
    pub fn sizes(&self, material: &str, shape: &str) -> MeshResult<Vec<&str>> {
        let sizes: Vec<&str> = self
            .rows
            .iter()
            .filter(|r| r.material == material && r.shape == shape)
            .map(|r| r.size.as_str())
            .collect();
        if sizes.is_empty() {
            self.shapes(material)?;
            return Err(MeshError::ShapeNotFound {
                material: material.to_string(),
                shape: shape.to_string(),
            });
        }
        Ok(sizes)
    }

    /// Raw property values for a material, shape and size
    pub fn properties(&self, material: &str, shape: &str, size: &str) -> MeshResult<&[f64]> {
        let key = (material.to_string(), shape.to_string(), size.to_string());
        match self.index.get(&key) {
            Some(&i) => Ok(&self.rows[i].values),
            None => {
                self.sizes(material, shape)?;
                Err(MeshError::SizeNotFound {
                    material: material.to_string(),
                    shape: shape.to_string(),
                    size: size.to_string(),
                })
            }
        }
    }

    /// Decoded properties for a material, shape and size
    pub fn element(&self, material: &str, shape: &str, size: &str) -> MeshResult<ElementProperties> {
        let values = self.properties(material, shape, size)?;
        ElementProperties::from_values(shape, size, values)
    }
}

fn unique<'a>(items: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}

/// A property row split into its parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementProperties {
    pub deflection: DeflectionInput,
    pub utilization: f64,
    /// Section dimensions in analysis length units
    pub dimensions: Vec<f64>,
}

impl ElementProperties {
    pub fn from_values(shape: &str, size: &str, values: &[f64]) -> MeshResult<Self> {
        if values.len() <= UTILIZATION_INDEX {
            return Err(MeshError::MissingProperty {
                shape: shape.to_string(),
                size: size.to_string(),
                index: UTILIZATION_INDEX,
                available: values.len(),
            });
        }

        Ok(Self {
            deflection: DeflectionInput::from_slice(values)?,
            utilization: values[UTILIZATION_INDEX],
            dimensions: values[DIMENSIONS_START.min(values.len())..].to_vec(),
        })
    }

    /// Dimension `i` (counting from the first dimension), or a
    /// [`MeshError::MissingProperty`]
    pub fn dimension(&self, shape: &str, size: &str, i: usize) -> MeshResult<f64> {
        self.dimensions
            .get(i)
            .copied()
            .ok_or_else(|| MeshError::MissingProperty {
                shape: shape.to_string(),
                size: size.to_string(),
                index: DIMENSIONS_START + i,
                available: DIMENSIONS_START + self.dimensions.len(),
            })
    }
}
