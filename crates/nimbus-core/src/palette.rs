use std::sync::OnceLock;

/// Number of entries in the shared palette.
pub const PALETTE_SIZE: usize = 256;

static PLAN9: OnceLock<[[u8; 3]; PALETTE_SIZE]> = OnceLock::new();

/// The Plan 9 reference palette: a 4x4x4 subdivision of the RGB cube
/// crossed with 4 intensity levels, including 16 gray shades at every 17th
/// level. Fixed and shared so successive frames of an animation map to
/// identical indices.
pub fn reference_palette() -> &'static [[u8; 3]; PALETTE_SIZE] {
    PLAN9.get_or_init(build_plan9)
}

fn build_plan9() -> [[u8; 3]; PALETTE_SIZE] {
    let mut palette = [[0u8; 3]; PALETTE_SIZE];
    let mut i = 0;
    for r in 0..4u32 {
        for v in 0..4u32 {
            for g in 0..4u32 {
                for b in 0..4u32 {
                    let den = r.max(g).max(b);
                    palette[i] = if den == 0 {
                        // Pure gray subcube; v picks the shade.
                        let gray = (v * 0x11) as u8;
                        [gray, gray, gray]
                    } else {
                        let num = 17 * (4 * den + v);
                        [
                            (r * num / den) as u8,
                            (g * num / den) as u8,
                            (b * num / den) as u8,
                        ]
                    };
                    i += 1;
                }
            }
        }
    }
    palette
}

/// Index of the palette entry closest to `rgb` by squared distance.
pub fn nearest(palette: &[[u8; 3]; PALETTE_SIZE], rgb: [u8; 3]) -> u8 {
    let mut best = 0usize;
    let mut best_dist = u32::MAX;
    for (i, entry) in palette.iter().enumerate() {
        let dr = entry[0] as i32 - rgb[0] as i32;
        let dg = entry[1] as i32 - rgb[1] as i32;
        let db = entry[2] as i32 - rgb[2] as i32;
        let dist = (dr * dr + dg * dg + db * db) as u32;
        if dist < best_dist {
            best_dist = dist;
            best = i;
            if dist == 0 {
                break;
            }
        }
    }
    best as u8
}

/// Palette flattened to `[r, g, b, r, g, b, ...]` as GIF encoders expect.
pub fn flattened() -> Vec<u8> {
    reference_palette().iter().flatten().copied().collect()
}
