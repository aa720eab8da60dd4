//! Sphere mesh generation (UV sphere)

use std::f32::consts::PI;

use crate::constants::{SPHERE_LAT_DIVISIONS, SPHERE_LON_DIVISIONS, SPHERE_RADIUS};
use crate::mesh::Mesh;

use super::PrimitiveError;

/// Generate the default UV sphere used by the viewer
pub fn generate_sphere_mesh() -> Mesh {
    build_sphere(SPHERE_RADIUS, SPHERE_LAT_DIVISIONS, SPHERE_LON_DIVISIONS)
}

/// Generate a UV sphere mesh
///
/// Latitude runs from the north pole (`lat = 0`, at +Y) to the south pole;
/// longitude wraps a full turn with the seam column duplicated so UVs stay in
/// [0, 1]. Each pole row repeats one point per longitude sample, which yields
/// zero-width triangles at the poles.
///
/// # Arguments
/// * `radius` - Sphere radius (must be positive)
/// * `lat_divisions` - Number of latitude bands (at least 1)
/// * `long_divisions` - Number of longitude segments (at least 1)
pub fn generate_sphere(
    radius: f32,
    lat_divisions: u32,
    long_divisions: u32,
) -> Result<Mesh, PrimitiveError> {
    if radius <= 0.0 {
        return Err(PrimitiveError::InvalidRadius(radius));
    }
    if lat_divisions == 0 || long_divisions == 0 {
        return Err(PrimitiveError::InvalidDivisions {
            lat_divisions,
            long_divisions,
        });
    }

    Ok(build_sphere(radius, lat_divisions, long_divisions))
}

fn build_sphere(radius: f32, lat_divisions: u32, long_divisions: u32) -> Mesh {
    let mut vertices = Vec::new();
    let mut uvs = Vec::new();
    let mut faces = Vec::new();

    // Generate vertices row by row, latitude-major
    for lat in 0..=lat_divisions {
        let lat_angle = (lat as f32 / lat_divisions as f32) * PI; // 0 at north pole, PI at south
        let sin_lat = lat_angle.sin();
        let cos_lat = lat_angle.cos();

        for long in 0..=long_divisions {
            let long_angle = (long as f32 / long_divisions as f32) * 2.0 * PI;

            let x = radius * sin_lat * long_angle.cos();
            let y = radius * cos_lat;
            let z = radius * sin_lat * long_angle.sin();
            vertices.push([x, y, z]);

            let u = long as f32 / long_divisions as f32;
            let v = lat as f32 / lat_divisions as f32;
            uvs.push([u, v]);
        }
    }

    // Two triangles per quad cell, same diagonal everywhere
    let ring = long_divisions + 1;
    for lat in 0..lat_divisions {
        for long in 0..long_divisions {
            let current = lat * ring + long;
            let next_lat = current + ring;

            faces.push([current, next_lat, next_lat + 1]);
            faces.push([current, next_lat + 1, current + 1]);
        }
    }

    Mesh {
        vertices,
        faces,
        uvs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_and_face_counts() {
        for (lat, long) in [(1, 1), (2, 2), (3, 5), (16, 32)] {
            let mesh = generate_sphere(1.0, lat, long).unwrap();
            assert_eq!(mesh.vertex_count(), ((lat + 1) * (long + 1)) as usize);
            assert_eq!(mesh.uvs.len(), mesh.vertex_count());
            assert_eq!(mesh.face_count(), (2 * lat * long) as usize);
            mesh.validate().unwrap();
        }
    }

    #[test]
    fn test_vertices_on_sphere_surface() {
        let radius = 2.5;
        let mesh = generate_sphere(radius, 8, 12).unwrap();
        for v in &mesh.vertices {
            let distance = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
            assert!((distance - radius).abs() < 0.001);
        }
    }

    #[test]
    fn test_pole_rows_collapse() {
        let radius = 1.5;
        let mesh = generate_sphere(radius, 4, 6).unwrap();
        let ring = 7;
        for long in 0..ring {
            let north = mesh.vertices[long];
            assert!(north[0].abs() < 0.001);
            assert!((north[1] - radius).abs() < 0.001);
            assert!(north[2].abs() < 0.001);

            let south = mesh.vertices[4 * ring + long];
            assert!(south[0].abs() < 0.001);
            assert!((south[1] + radius).abs() < 0.001);
            assert!(south[2].abs() < 0.001);
        }
    }

    #[test]
    fn test_uv_pole_rows() {
        let mesh = generate_sphere(1.0, 4, 6).unwrap();
        let ring = 7;
        for long in 0..ring {
            assert_eq!(mesh.uvs[long][1], 0.0); // north row
            assert_eq!(mesh.uvs[4 * ring + long][1], 1.0); // south row
        }
        for uv in &mesh.uvs {
            assert!((0.0..=1.0).contains(&uv[0]));
            assert!((0.0..=1.0).contains(&uv[1]));
        }
    }

    #[test]
    fn test_two_by_two_sphere() {
        let mesh = generate_sphere(1.0, 2, 2).unwrap();
        assert_eq!(mesh.vertex_count(), 9);
        assert_eq!(mesh.face_count(), 8);
        assert_eq!(mesh.uvs.len(), 9);

        // idx(1, 0) sits on the equator at longitude 0
        let v = mesh.vertices[3];
        assert!((v[0] - 1.0).abs() < 0.001);
        assert!(v[1].abs() < 0.001);
        assert!(v[2].abs() < 0.001);
    }

    #[test]
    fn test_face_emission_order() {
        let mesh = generate_sphere(1.0, 1, 1).unwrap();
        assert_eq!(mesh.faces, vec![[0, 2, 3], [0, 3, 1]]);
    }

    #[test]
    fn test_deterministic() {
        let a = generate_sphere(1.5, 10, 14).unwrap();
        let b = generate_sphere(1.5, 10, 14).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(matches!(
            generate_sphere(0.0, 4, 4),
            Err(PrimitiveError::InvalidRadius(_))
        ));
        assert!(matches!(
            generate_sphere(-1.0, 4, 4),
            Err(PrimitiveError::InvalidRadius(_))
        ));
        assert!(matches!(
            generate_sphere(1.0, 0, 4),
            Err(PrimitiveError::InvalidDivisions { .. })
        ));
        assert!(matches!(
            generate_sphere(1.0, 4, 0),
            Err(PrimitiveError::InvalidDivisions { .. })
        ));
    }
}
