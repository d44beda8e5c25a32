//! Orbits a camera around a unit cube and prints where its corners land in
//! normalized device coordinates, plus the exact bytes a uniform-buffer
//! upload would copy.
//!
//! ```sh
//! cargo run --example camera_matrices
//! ```

use std::f32::consts::{FRAC_PI_3, TAU};
use strata::{Mat3, Mat4, Vec3};

fn main() {
    let proj = Mat4::perspective(FRAC_PI_3, 16.0 / 9.0, 0.1, 100.0);

    for step in 0..4 {
        let angle = step as f32 / 4.0 * TAU;
        let eye = Vec3::new(angle.cos() * 6.0, 3.0, angle.sin() * 6.0);
        let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::Y);
        let view_proj = proj * view;

        println!("eye at ({:+.2}, {:+.2}, {:+.2}):", eye.x, eye.y, eye.z);
        for corner in cube_corners() {
            let clip = view_proj.transform([corner.x, corner.y, corner.z, 1.0]);
            let (x, y, z) = (clip[0] / clip[3], clip[1] / clip[3], clip[2] / clip[3]);
            println!(
                "  ({:+.1}, {:+.1}, {:+.1}) -> ndc ({:+.3}, {:+.3}, depth {:.4})",
                corner.x, corner.y, corner.z, x, y, z
            );
        }

        // The normal matrix rides along in the same uniform block, padded to
        // 16-byte rows.
        let normal = Mat3::from_mat4(&view);
        println!(
            "  uniform bytes: {} (view-proj) + {} (normal matrix)\n",
            bytemuck::bytes_of(&view_proj).len(),
            bytemuck::bytes_of(&normal).len(),
        );
    }
}

fn cube_corners() -> [Vec3; 8] {
    let mut corners = [Vec3::ZERO; 8];
    for (i, corner) in corners.iter_mut().enumerate() {
        *corner = Vec3::new(
            if i & 1 == 0 { -0.5 } else { 0.5 },
            if i & 2 == 0 { -0.5 } else { 0.5 },
            if i & 4 == 0 { -0.5 } else { 0.5 },
        );
    }
    corners
}
