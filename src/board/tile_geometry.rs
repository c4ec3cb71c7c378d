//! Screen-space tile coordinates.
//!
//! Tiles are addressed the way the board is drawn: `x` grows left to right
//! (file a..h) and `y` grows top to bottom, so `y == 0` is rank 8. Pixel
//! positions map to tiles by integer division with the tile side length.

use crate::board::board_types::Square;

/// Largest tile side for which every pixel of the board fits in a `u32`.
pub const MAX_TILE_SIDE: u32 = u32::MAX / 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub x: u8,
    pub y: u8,
}

impl Tile {
    /// `None` when either coordinate is outside `0..8`.
    #[inline]
    pub fn new(x: u8, y: u8) -> Option<Self> {
        if x < 8 && y < 8 {
            Some(Self { x, y })
        } else {
            None
        }
    }
}

#[inline]
pub fn square_from_tile(tile: Tile) -> Square {
    (7 - tile.y) * 8 + tile.x
}

#[inline]
pub fn tile_from_square(square: Square) -> Tile {
    Tile {
        x: square % 8,
        y: 7 - square / 8,
    }
}

/// Tile under a pixel position, or `None` outside the 8x8 board area.
pub fn tile_from_position(px: u32, py: u32, side: u32) -> Option<Tile> {
    if side == 0 {
        return None;
    }
    let x = px / side;
    let y = py / side;
    if x >= 8 || y >= 8 {
        return None;
    }
    Tile::new(x as u8, y as u8)
}

/// Top-left pixel of a tile, or `None` if it does not fit in a `u32`.
#[inline]
pub fn tile_origin(tile: Tile, side: u32) -> Option<(u32, u32)> {
    Some((
        u32::from(tile.x).checked_mul(side)?,
        u32::from(tile.y).checked_mul(side)?,
    ))
}
