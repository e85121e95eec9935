//! Gorilla placement on the generated skyline.

use glam::IVec2;

use crate::error::GameError;
use crate::skyline::Building;

/// Placement needs a building on each side plus a right-hand neighbour to
/// measure its width.
pub const MIN_BUILDINGS: usize = 4;

/// Pick the buildings the two gorillas stand on: player 1 on the second or
/// third from the left, player 2 on the second or third from the right.
pub fn choose_buildings(count: usize, rng: &mut fastrand::Rng) -> Result<[usize; 2], GameError> {
    if count < MIN_BUILDINGS {
        return Err(GameError::Configuration(format!(
            "placement needs at least {MIN_BUILDINGS} buildings, skyline has {count}"
        )));
    }
    let one = rng.usize(1..=2);
    let two = rng.usize(count - 3..=count - 2);
    Ok([one, two])
}

/// Top-left corner of a sprite of `sprite_size` standing centred on
/// `buildings[index]`, one pixel above the roof.
pub fn anchor(buildings: &[Building], index: usize, sprite_size: (i32, i32)) -> IVec2 {
    let b = buildings[index];
    let width = buildings[index + 1].left - b.left;
    IVec2::new(b.left + width / 2 - sprite_size.0 / 2, b.top - sprite_size.1 - 1)
}

/// Positions for player 1 and player 2, in that order.
pub fn place(
    buildings: &[Building],
    sprite_size: (i32, i32),
    rng: &mut fastrand::Rng,
) -> Result<[IVec2; 2], GameError> {
    let [one, two] = choose_buildings(buildings.len(), rng)?;
    Ok([
        anchor(buildings, one, sprite_size),
        anchor(buildings, two, sprite_size),
    ])
}
