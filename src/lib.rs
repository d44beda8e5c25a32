//! # Strata
//!
//! **CPU-side matrix math and mipmap-chain generation for GPU rendering.**
//!
//! Build view and projection matrices, compose 2D and 3D transforms, and
//! generate full mipmap chains from RGBA8 images — everything a render loop
//! needs to fill its uniform buffers and texture levels, with no GPU API in
//! sight.
//!
//! ## Quick Start
//!
//! ```
//! use strata::{Mat4, MipImage, Vec3};
//!
//! // A classic view-projection for a camera at (0, 2, 5) looking at the origin.
//! let view = Mat4::look_at(Vec3::new(0.0, 2.0, 5.0), Vec3::ZERO, Vec3::Y);
//! let proj = Mat4::perspective(std::f32::consts::FRAC_PI_3, 16.0 / 9.0, 0.1, 100.0);
//! let view_proj = proj * view;
//!
//! // Row-major, tightly packed: copy straight into a uniform buffer.
//! let uniform_bytes: &[u8] = bytemuck::bytes_of(&view_proj);
//! assert_eq!(uniform_bytes.len(), 64);
//!
//! // Mipmap a solid-color texture; every level keeps the color.
//! let base = MipImage::new(4, 4, [200u8, 100, 50, 255].repeat(16)).unwrap();
//! let chain = base.mip_chain();
//! assert_eq!(chain.len(), 3);
//! ```
//!
//! ## Philosophy
//!
//! - **Pure functions, plain data** — every operation takes values and
//!   returns values; there is no hidden state and nothing to initialize.
//! - **Upload-ready layouts** — `Mat4` is 16 tightly packed floats, `Mat3`
//!   carries the 4-float row stride WGSL alignment demands, and mip levels
//!   are raw RGBA8 rows. `bytemuck` casts them to bytes with zero copying.
//! - **Numeric honesty** — degenerate inputs (singular matrices, zero-size
//!   projection boxes) propagate as non-finite floats the way the math says
//!   they should, while structural mistakes (malformed pixel buffers) fail
//!   fast with a real error.

mod mat3;
mod mat4;
mod mips;
mod vec3;

pub use mat3::Mat3;
pub use mat4::Mat4;
pub use mips::{MipError, MipImage, num_mip_levels};
pub use vec3::Vec3;
