use rand::Rng;

use super::grid::{CellRect, Grid};
use super::state::Position;

/// Cells per side of an item's square footprint
pub const ITEM_FOOTPRINT: i32 = 2;

/// Icon names shown for powerups (security services)
pub const POWERUP_ICONS: [&str; 8] = [
    "Client VPN",
    "CloudTrail",
    "GuardDuty",
    "IAM Identity Center",
    "Key Management Service",
    "Network Firewall",
    "Shield",
    "WAF",
];

/// Icon names shown for bombs (attacks)
pub const BOMB_ICONS: [&str; 5] = ["DDoS", "Malware", "Phishing", "Ransomware", "SQL Injection"];

/// What consuming an item does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Grows the snake and scores a point
    Powerup,
    /// Ends the game
    Bomb,
}

/// The single active item on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    /// Top-left cell of the footprint
    pub position: Position,
    pub kind: ItemKind,
    /// Cosmetic identifier, opaque to the simulation
    pub icon: &'static str,
    /// Tick time the item appeared, drives the expiry rule
    pub spawned_at_ms: u64,
}

impl Item {
    /// The 2x2 area the item occupies
    pub fn footprint(&self) -> CellRect {
        CellRect::new(
            self.position.x,
            self.position.y,
            ITEM_FOOTPRINT,
            ITEM_FOOTPRINT,
        )
    }

    /// True if the given cell lies inside the footprint
    pub fn covers(&self, pos: Position) -> bool {
        self.footprint().intersects(&CellRect::cell(pos))
    }
}

/// Chooses item kind, placement and icon.
///
/// Kind follows a fixed rotation: after `powerups_per_bomb` consecutive
/// powerups the next spawn is a bomb and the count restarts. The count
/// advances on every spawn, so a replacement for an expired item still
/// moves the rotation forward.
#[derive(Debug)]
pub struct ItemSpawner {
    powerups_per_bomb: u32,
    powerups_since_bomb: u32,
}

impl ItemSpawner {
    pub fn new(powerups_per_bomb: u32) -> Self {
        Self {
            powerups_per_bomb,
            powerups_since_bomb: 0,
        }
    }

    /// Restart the rotation, as at the beginning of a game
    pub fn reset(&mut self) {
        self.powerups_since_bomb = 0;
    }

    /// Produce the next item, placed on a free cell of the spawn region.
    /// Returns `None` only when no free cell exists.
    pub fn spawn<R: Rng>(
        &mut self,
        rng: &mut R,
        grid: &Grid,
        occupied: &[Position],
        now_ms: u64,
    ) -> Option<Item> {
        let position = grid.random_free_cell(rng, occupied)?;

        let (kind, icon) = if self.powerups_since_bomb >= self.powerups_per_bomb {
            self.powerups_since_bomb = 0;
            (ItemKind::Bomb, BOMB_ICONS[rng.gen_range(0..BOMB_ICONS.len())])
        } else {
            self.powerups_since_bomb += 1;
            (
                ItemKind::Powerup,
                POWERUP_ICONS[rng.gen_range(0..POWERUP_ICONS.len())],
            )
        };

        Some(Item {
            position,
            kind,
            icon,
            spawned_at_ms: now_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_kinds(n: usize) -> Vec<ItemKind> {
        let grid = Grid::new(40, 30, 2);
        let mut rng = rand::thread_rng();
        let mut spawner = ItemSpawner::new(3);

        (0..n)
            .map(|i| {
                spawner
                    .spawn(&mut rng, &grid, &[], i as u64 * 1000)
                    .unwrap()
                    .kind
            })
            .collect()
    }

    #[test]
    fn test_bomb_rotation() {
        assert_eq!(
            spawn_kinds(4),
            vec![
                ItemKind::Powerup,
                ItemKind::Powerup,
                ItemKind::Powerup,
                ItemKind::Bomb
            ]
        );
    }

    #[test]
    fn test_rotation_repeats() {
        let kinds = spawn_kinds(8);
        assert_eq!(kinds[3], ItemKind::Bomb);
        assert_eq!(kinds[7], ItemKind::Bomb);
        assert_eq!(kinds.iter().filter(|k| **k == ItemKind::Bomb).count(), 2);
    }

    #[test]
    fn test_reset_restarts_rotation() {
        let grid = Grid::new(40, 30, 2);
        let mut rng = rand::thread_rng();
        let mut spawner = ItemSpawner::new(3);

        for _ in 0..3 {
            spawner.spawn(&mut rng, &grid, &[], 0).unwrap();
        }
        spawner.reset();

        let kind = spawner.spawn(&mut rng, &grid, &[], 0).unwrap().kind;
        assert_eq!(kind, ItemKind::Powerup);
    }

    #[test]
    fn test_icon_matches_kind() {
        let grid = Grid::new(40, 30, 2);
        let mut rng = rand::thread_rng();
        let mut spawner = ItemSpawner::new(3);

        for _ in 0..12 {
            let item = spawner.spawn(&mut rng, &grid, &[], 0).unwrap();
            match item.kind {
                ItemKind::Powerup => assert!(POWERUP_ICONS.contains(&item.icon)),
                ItemKind::Bomb => assert!(BOMB_ICONS.contains(&item.icon)),
            }
        }
    }

    #[test]
    fn test_spawn_avoids_occupied_and_stamps_time() {
        let grid = Grid::new(10, 10, 2);
        let mut rng = rand::thread_rng();
        let mut spawner = ItemSpawner::new(3);
        let occupied = vec![Position::new(4, 4), Position::new(4, 5)];

        for _ in 0..50 {
            let item = spawner.spawn(&mut rng, &grid, &occupied, 1234).unwrap();
            assert!(!occupied.contains(&item.position));
            assert_eq!(item.spawned_at_ms, 1234);
        }
    }

    #[test]
    fn test_footprint_coverage() {
        let item = Item {
            position: Position::new(22, 15),
            kind: ItemKind::Powerup,
            icon: "Shield",
            spawned_at_ms: 0,
        };

        assert!(item.covers(Position::new(22, 15)));
        assert!(item.covers(Position::new(23, 15)));
        assert!(item.covers(Position::new(22, 16)));
        assert!(item.covers(Position::new(23, 16)));
        assert!(!item.covers(Position::new(21, 15)));
        assert!(!item.covers(Position::new(24, 15)));
        assert!(!item.covers(Position::new(22, 17)));
    }
}
