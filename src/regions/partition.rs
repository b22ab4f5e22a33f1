//! The fixed region partition of the board.
//!
//! Regions are purely descriptive in scope: each cell's region supplies the
//! baseline color it returns to when reset. Regions impose no placement
//! constraint on the engine's rules.
//!
//! The standard board is 6x6 with nine 2x2 regions, compiled in as constant
//! data; the partition is validated at construction to be disjoint and to
//! cover the board exactly.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::Coord;

/// Number of cells in every region.
pub const REGION_CELLS: usize = 4;

/// Display color of a marked cell, regardless of region.
pub const MARKED_COLOR: u32 = 0x666666;

/// Region identifier, 0-based.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionId(pub u8);

impl RegionId {
    /// Create a region ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw region index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Region {}", self.0)
    }
}

/// A fixed block of cells sharing a display color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// This region's id.
    pub id: RegionId,
    /// Baseline (reset) color, 0xRRGGBB.
    pub color: u32,
    /// The cells belonging to this region.
    pub cells: [Coord; REGION_CELLS],
}

/// The complete region partition of a board.
///
/// Invariant: regions are disjoint and together cover every cell; enforced
/// at construction. Read-only afterward.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionPartition {
    size: u8,
    regions: Vec<Region>,
    /// Region of each cell, indexed by arena slot.
    by_cell: Vec<RegionId>,
}

/// Baseline colors of the nine standard regions, row-major.
const STANDARD_COLORS: [u32; 9] = [
    0xffcccc, 0xccffcc, 0xccccff, 0xffffcc, 0xffccff, 0xccffff, 0xd9d9d9, 0xffe6b3, 0xb3e6ff,
];

impl RegionPartition {
    /// Build a partition from explicit regions.
    ///
    /// Panics if the regions are not disjoint or do not cover the
    /// `size x size` board; partitions are compiled-in data, so a bad one
    /// is a programming error, not a runtime condition.
    #[must_use]
    pub fn new(size: u8, regions: Vec<Region>) -> Self {
        let cell_count = size as usize * size as usize;
        assert_eq!(
            regions.len() * REGION_CELLS,
            cell_count,
            "Regions must cover the board exactly"
        );

        let mut by_cell = vec![RegionId::default(); cell_count];
        let mut seen: FxHashSet<Coord> = FxHashSet::default();
        for region in &regions {
            for &coord in &region.cells {
                assert!(coord.in_bounds(size), "Region cell {coord} is off-board");
                assert!(seen.insert(coord), "Regions overlap at {coord}");
                by_cell[coord.index(size)] = region.id;
            }
        }

        Self {
            size,
            regions,
            by_cell,
        }
    }

    /// The standard partition: nine 2x2 regions tiling the 6x6 board.
    #[must_use]
    pub fn standard() -> Self {
        let regions = STANDARD_COLORS
            .iter()
            .enumerate()
            .map(|(index, &color)| {
                let row = (index / 3) as u8 * 2;
                let col = (index % 3) as u8 * 2;
                Region {
                    id: RegionId::new(index as u8),
                    color,
                    cells: [
                        Coord::new(row, col),
                        Coord::new(row, col + 1),
                        Coord::new(row + 1, col),
                        Coord::new(row + 1, col + 1),
                    ],
                }
            })
            .collect();
        Self::new(6, regions)
    }

    /// Board side length this partition covers.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// All regions, in id order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Region of a cell. The coordinate must be on the board.
    #[must_use]
    pub fn region_of(&self, coord: Coord) -> RegionId {
        self.by_cell[coord.index(self.size)]
    }

    /// Look up a region by id.
    #[must_use]
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.index())
    }

    /// Baseline color of a cell's region. The coordinate must be on the
    /// board.
    #[must_use]
    pub fn color_of(&self, coord: Coord) -> u32 {
        self.regions[self.region_of(coord).index()].color
    }
}
