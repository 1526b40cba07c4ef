//! Fixed board layout tables.
//!
//! The track length, picture placements and the single shortcut are
//! compile-time constants. `check` validates the tables once per
//! generation in debug builds.

use rustc_hash::FxHashSet;

use super::square::Picture;

/// Number of squares, start and finish included.
pub const BOARD_LENGTH: usize = 135;

/// Picture squares by index. The entry flagged `true` is the lose-turn square.
pub const PICTURE_SQUARES: [(usize, Picture, bool); 6] = [
    (9, Picture::PeppermintForest, false),
    (20, Picture::GummyHills, false),
    (42, Picture::LollipopWoods, false),
    (69, Picture::GumdropMountains, false),
    (101, Picture::IceCreamSea, false),
    (120, Picture::LicoriceLagoon, true),
];

/// The one shortcut: (origin, target).
pub const SHORTCUT: (usize, usize) = (5, 59);

/// Describe the first problem with the layout tables, if any.
pub(crate) fn check() -> Option<String> {
    let finish = BOARD_LENGTH - 1;
    let (origin, target) = SHORTCUT;

    let mut seen = FxHashSet::default();
    for index in PICTURE_SQUARES.iter().map(|(i, _, _)| *i).chain([origin]) {
        if index == 0 || index >= finish {
            return Some(format!("special square {index} is outside the track"));
        }
        if !seen.insert(index) {
            return Some(format!("square {index} is listed twice"));
        }
    }

    let mut pictures = FxHashSet::default();
    for (_, picture, _) in PICTURE_SQUARES {
        if !pictures.insert(picture) {
            return Some(format!("{picture} is placed twice"));
        }
    }

    if target <= origin || target >= BOARD_LENGTH {
        return Some(format!("shortcut {origin} -> {target} does not move forward on the board"));
    }

    None
}
