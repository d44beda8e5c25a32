//! Generates a mip chain from a procedural noise texture and writes every
//! level to `mip_levels/level_N.png`.
//!
//! ```sh
//! cargo run --example mip_chain
//! ```

use strata::MipImage;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let size = 256;
    let base = MipImage::new(size, size, noise_pixels(size, 7))?;

    let out_dir = std::path::Path::new("mip_levels");
    std::fs::create_dir_all(out_dir)?;

    for (i, level) in base.mip_chain().into_iter().enumerate() {
        let path = out_dir.join(format!("level_{}.png", i));
        println!("{}x{} -> {}", level.width(), level.height(), path.display());
        level.into_image().save(&path)?;
    }

    Ok(())
}

/// Blocky earth-toned noise, the kind a voxel demo would slap on a cube.
fn noise_pixels(size: u32, seed: u32) -> Vec<u8> {
    let palette: &[[u8; 3]] = &[
        [139, 90, 43],
        [128, 128, 128],
        [85, 85, 85],
        [160, 120, 60],
        [100, 70, 40],
        [120, 100, 70],
    ];

    let mut data = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let base = palette[(hash(x / 8, y / 8, seed) % palette.len() as u32) as usize];
            let variation = ((hash(x, y, seed ^ 0x9e37) % 24) as i32) - 12;
            for channel in base {
                data.push((channel as i32 + variation).clamp(0, 255) as u8);
            }
            data.push(255);
        }
    }
    data
}

fn hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_add(x.wrapping_mul(374761393));
    h = h.wrapping_add(y.wrapping_mul(668265263));
    h ^= h >> 13;
    h = h.wrapping_mul(1274126177);
    h ^= h >> 16;
    h
}
