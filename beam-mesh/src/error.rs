//! Error types for beam mesh generation

use thiserror::Error;

/// Main error type for mesh and deflection generation
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Degenerate beam: {0}")]
    DegenerateBeam(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Material '{0}' not found in property table")]
    MaterialNotFound(String),

    #[error("Shape '{shape}' not found for material '{material}'")]
    ShapeNotFound { material: String, shape: String },

    #[error("Size '{size}' not found for {material} {shape}")]
    SizeNotFound {
        material: String,
        shape: String,
        size: String,
    },

    #[error("Unknown shape family '{0}'")]
    UnknownShape(String),

    #[error("Missing property {index} for {shape} '{size}' (row has {available} values)")]
    MissingProperty {
        shape: String,
        size: String,
        index: usize,
        available: usize,
    },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Mesh has {0} vertices, too many for 16-bit indices")]
    IndexOverflow(usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for mesh operations
pub type MeshResult<T> = Result<T, MeshError>;
