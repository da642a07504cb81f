//! Hole layout
//!
//! The playfield art has 73 decoy holes and 10 goals. The layout is fixed
//! data; the only thing that can go wrong with it is a custom layout with no
//! goals, which is rejected up front.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A circular hole in the playfield
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub center: Vec2,
    pub radius: f32,
}

impl Hole {
    pub const fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            radius,
        }
    }
}

/// Which collection a hole came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoleKind {
    Decoy,
    /// Index into the goal sequence
    Goal(usize),
}

/// Goals in the order they must be sunk
const GOALS: [(f32, f32, f32); 10] = [
    (350.0, 486.0, 8.0),
    (481.0, 472.0, 8.0),
    (220.0, 436.0, 8.0),
    (415.0, 399.0, 8.0),
    (297.0, 339.0, 8.0),
    (471.0, 278.0, 8.0),
    (358.0, 246.0, 8.0),
    (240.0, 215.0, 8.0),
    (422.0, 170.0, 8.0),
    (313.0, 143.0, 8.0),
];

// (523, 279) appears twice in the cabinet art; both entries are kept.
const DECOYS: [(f32, f32, f32); 73] = [
    (203.0, 482.0, 11.0),
    (177.0, 448.0, 11.0),
    (164.0, 409.0, 12.0),
    (257.0, 469.0, 11.0),
    (302.0, 467.0, 12.0),
    (350.0, 453.0, 11.0),
    (403.0, 475.0, 11.0),
    (497.0, 520.0, 11.0),
    (525.0, 473.0, 11.0),
    (539.0, 446.0, 12.0),
    (495.0, 442.0, 11.0),
    (447.0, 453.0, 11.0),
    (410.0, 439.0, 11.0),
    (251.0, 415.0, 11.0),
    (538.0, 408.0, 11.0),
    (452.0, 400.0, 12.0),
    (353.0, 407.0, 12.0),
    (314.0, 392.0, 11.0),
    (225.0, 379.0, 12.0),
    (286.0, 373.0, 11.0),
    (336.0, 371.0, 11.0),
    (498.0, 356.0, 12.0),
    (425.0, 358.0, 11.0),
    (391.0, 356.0, 11.0),
    (263.0, 351.0, 11.0),
    (197.0, 340.0, 11.0),
    (369.0, 340.0, 11.0),
    (472.0, 324.0, 11.0),
    (515.0, 305.0, 11.0),
    (445.0, 302.0, 11.0),
    (231.0, 326.0, 12.0),
    (182.0, 313.0, 11.0),
    (267.0, 312.0, 11.0),
    (164.0, 285.0, 13.0),
    (297.0, 289.0, 11.0),
    (360.0, 294.0, 11.0),
    (333.0, 271.0, 13.0),
    (386.0, 271.0, 13.0),
    (418.0, 278.0, 11.0),
    (523.0, 279.0, 11.0),
    (523.0, 279.0, 11.0),
    (169.0, 227.0, 13.0),
    (210.0, 243.0, 11.0),
    (240.0, 254.0, 11.0),
    (271.0, 243.0, 11.0),
    (307.0, 247.0, 11.0),
    (418.0, 247.0, 13.0),
    (471.0, 230.0, 11.0),
    (498.0, 254.0, 11.0),
    (538.0, 252.0, 12.0),
    (197.0, 215.0, 11.0),
    (282.0, 214.0, 11.0),
    (333.0, 224.0, 12.0),
    (386.0, 223.0, 12.0),
    (422.0, 208.0, 11.0),
    (359.0, 201.0, 11.0),
    (210.0, 188.0, 11.0),
    (219.0, 153.0, 13.0),
    (241.0, 179.0, 11.0),
    (314.0, 184.0, 11.0),
    (291.0, 163.0, 12.0),
    (335.0, 163.0, 12.0),
    (378.0, 171.0, 11.0),
    (445.0, 190.0, 11.0),
    (467.0, 170.0, 11.0),
    (522.0, 163.0, 12.0),
    (269.0, 144.0, 11.0),
    (358.0, 143.0, 11.0),
    (399.0, 150.0, 11.0),
    (444.0, 150.0, 11.0),
    (421.0, 131.0, 12.0),
    (291.0, 124.0, 13.0),
    (336.0, 124.0, 13.0),
];

fn to_holes(coords: &[(f32, f32, f32)]) -> Vec<Hole> {
    coords.iter().map(|&(x, y, r)| Hole::new(x, y, r)).collect()
}

/// Read-only registry of decoy holes and the ordered goal sequence
#[derive(Debug, Clone, Serialize)]
pub struct HoleRegistry {
    decoys: Vec<Hole>,
    goals: Vec<Hole>,
    /// Decoys followed by goals, the order collisions are scanned in
    all: Vec<Hole>,
}

impl HoleRegistry {
    /// Build a registry from a custom layout
    pub fn new(decoys: Vec<Hole>, goals: Vec<Hole>) -> Result<Self, ConfigError> {
        if goals.is_empty() {
            return Err(ConfigError::EmptyGoalSequence);
        }
        let all = decoys.iter().chain(goals.iter()).copied().collect();
        Ok(Self { decoys, goals, all })
    }

    /// The cabinet's layout
    pub fn standard() -> Self {
        let decoys = to_holes(&DECOYS);
        let goals = to_holes(&GOALS);
        let all = decoys.iter().chain(goals.iter()).copied().collect();
        Self { decoys, goals, all }
    }

    pub fn decoy_holes(&self) -> &[Hole] {
        &self.decoys
    }

    pub fn goal_sequence(&self) -> &[Hole] {
        &self.goals
    }

    pub fn all_holes(&self) -> &[Hole] {
        &self.all
    }

    /// Classify a position in `all_holes()`
    pub fn kind_of(&self, all_index: usize) -> HoleKind {
        if all_index < self.decoys.len() {
            HoleKind::Decoy
        } else {
            HoleKind::Goal(all_index - self.decoys.len())
        }
    }

    pub fn goal(&self, index: usize) -> Option<&Hole> {
        self.goals.get(index)
    }

    pub fn is_last_goal(&self, index: usize) -> bool {
        index + 1 == self.goals.len()
    }
}

impl Default for HoleRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
