//! Section Demo - generate every section in a property table for one beam
//!
//! Usage: section-demo [TABLE.csv] [--json]
//!
//! Without a table path a small built-in table is used. `--json` prints the
//! mesh and deflected line of the first entry as JSON.

use anyhow::{Context, Result};
use beam_mesh::prelude::*;

const BUILTIN_TABLE: &str = "\
Material,Shape,Size,iu1,iu2,iu3,ir1,ir2,ir3,ju1,ju2,ju3,jr1,jr2,jr3,ratio,d1,d2,d3,d4
Steel,W,W12x26,0,0,0,0,0,0,0,0,-0.62,0,0,0,0.82,6.49,12.2,0.38,0.23
Steel,W,W14x30,0,0,0,0,0,0,0,0,-0.41,0,0,0,0.64,6.73,13.8,0.385,0.27
Steel,HSS,HSS8x8x1/4,0,0,0,0,0,0,0,0,-0.55,0,0,0,0.91,8,8,0.233
Steel,Built up I Beam,W14x30+PL1/2,0,0,0,0,0,0,0,0,-0.28,0,0,0,0.55,1,0.5
Steel,PL,PL12x1,0,0,0,0,0,0,0,0,-1.9,0,0,0,1.35,12,1
Aluminum,W,W12x26,0,0,0,0,0,0,0,0,-1.74,0,0,0,1.12,6.49,12.2,0.38,0.23
";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let path = args.iter().find(|a| !a.starts_with("--"));

    let table = match path {
        Some(path) => PropertyTable::from_path(path)
            .with_context(|| format!("failed to load property table {path}"))?,
        None => PropertyTable::parse(BUILTIN_TABLE).context("failed to parse built-in table")?,
    };

    // 20 ft span in inches, shown 10 scene units long along -z
    let element = BeamElement::new(
        Vec3::zeros(),
        Vec3::new(0.0, 0.0, -10.0),
        Vec3::zeros(),
        Vec3::new(0.0, 240.0, 0.0),
    )?;
    let mut cache = MeshCache::new();

    println!("=== Beam Mesh Demo ===\n");
    println!("Unit scale: {:.5} scene units per inch\n", element.unit_scale());
    println!(
        "{:<10} {:<16} {:<16} {:>8} {:>10} {:>12} {:>10}",
        "Material", "Shape", "Size", "Verts", "Triangles", "Max defl", "Ratio"
    );

    for material in table.materials() {
        for shape in table.shapes(material)? {
            for size in table.sizes(material, shape)? {
                let display = element
                    .display(material, shape, size, &table, &mut cache)
                    .with_context(|| format!("failed to generate {material} {shape} {size}"))?;

                println!(
                    "{:<10} {:<16} {:<16} {:>8} {:>10} {:>12.3} {:>10.2}",
                    material,
                    shape,
                    size,
                    display.mesh.vertex_count(),
                    display.mesh.triangle_count(),
                    display.max_deflection,
                    display.utilization
                );
            }
        }
    }
    println!("\n{} meshes cached", cache.len());

    if json {
        let first = table.rows().first().context("property table is empty")?;
        let display = element.display(&first.material, &first.shape, &first.size, &table, &mut cache)?;
        println!("{}", display.mesh.to_json()?);
        println!("{}", serde_json::to_string_pretty(&display.deflection)?);
    }

    Ok(())
}
