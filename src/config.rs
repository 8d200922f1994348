use crate::vessel::VesselKind;

pub const BOARD_SIZE: u8 = 10;
pub const CELL_COUNT: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [VesselKind; NUM_SHIPS] = [
    VesselKind::new("carrier", 5),
    VesselKind::new("battleship", 4),
    VesselKind::new("destroyer", 3),
    VesselKind::new("submarine", 3),
    VesselKind::new("patrol", 2),
];

/// Total number of vessel cells in the canonical fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Look up a canonical fleet entry by name. Returns `None` if the name does
/// not match any fleet entry.
pub fn fleet_kind(name: &str) -> Option<VesselKind> {
    FLEET.iter().copied().find(|k| k.name() == name)
}
