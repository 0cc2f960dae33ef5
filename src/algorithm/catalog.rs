//! Weighted neighbourhood patterns and the validated catalog that holds them
//!
//! A catalog is built once, validated, and then shared read-only by every
//! cell evaluation of a generation run.

use std::collections::HashSet;

use crate::algorithm::rotation::{Rotation, RotationSet};
use crate::io::error::{Result, invalid_pattern};
use crate::spatial::tiles::{Kernel, TileType};

const W: TileType = TileType::Wall;
const E: TileType = TileType::Empty;

/// Rule associating an output tile with an expected neighbourhood
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// Human readable identifier, unique within a catalog
    pub id: String,
    /// Tile produced when the template matches
    pub output: TileType,
    /// Weight added per matching rotation
    pub weight: u32,
    /// Expected neighbours in slot order
    pub template: Kernel,
    /// Rotations under which the template is tried
    pub rotations: RotationSet,
}

impl Pattern {
    /// Create a pattern; validation happens when it joins a catalog
    pub fn new(
        id: impl Into<String>,
        output: TileType,
        weight: u32,
        template: Kernel,
        rotations: RotationSet,
    ) -> Self {
        Self {
            id: id.into(),
            output,
            weight,
            template,
            rotations,
        }
    }

    /// Whether the template, turned by `rotation`, agrees with `observed`
    ///
    /// `Unknown` observed slots match anything.
    pub fn matches(&self, observed: &Kernel, rotation: Rotation) -> bool {
        observed
            .iter()
            .zip(rotation.permutation())
            .all(|(&seen, &template_slot)| {
                !seen.is_resolved() || self.template.get(template_slot) == Some(&seen)
            })
    }

    /// Number of rotations under which the pattern matches `observed`
    pub fn match_count(&self, observed: &Kernel) -> u32 {
        self.rotations
            .iter()
            .filter(|&rotation| self.matches(observed, rotation))
            .count() as u32
    }

    fn validate(&self) -> Result<()> {
        if self.weight == 0 {
            return Err(invalid_pattern(&self.id, &"weight must be positive"));
        }
        if !self.output.is_template_tile() {
            return Err(invalid_pattern(
                &self.id,
                &format!("output tile {} cannot be generated", self.output),
            ));
        }
        if let Some((slot, tile)) = self
            .template
            .iter()
            .enumerate()
            .find(|(_, tile)| !tile.is_template_tile())
        {
            return Err(invalid_pattern(
                &self.id,
                &format!("template slot {slot} holds {tile}; only Wall and Empty are allowed"),
            ));
        }
        if self.rotations.is_empty() {
            return Err(invalid_pattern(
                &self.id,
                &"at least one rotation is required",
            ));
        }
        Ok(())
    }
}

/// Ordered, validated and immutable set of patterns
#[derive(Clone, Debug)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
}

impl PatternCatalog {
    /// Validate and wrap a list of patterns
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the list is empty, an id repeats, or
    /// any pattern has a zero weight, a non Wall/Empty output or template
    /// slot, or no rotation.
    pub fn new(patterns: Vec<Pattern>) -> Result<Self> {
        if patterns.is_empty() {
            return Err(invalid_pattern(
                "<catalog>",
                &"catalog must contain at least one pattern",
            ));
        }

        let mut ids = HashSet::with_capacity(patterns.len());
        for pattern in &patterns {
            pattern.validate()?;
            if !ids.insert(pattern.id.as_str()) {
                return Err(invalid_pattern(&pattern.id, &"duplicate pattern id"));
            }
        }

        Ok(Self { patterns })
    }

    /// The stock dungeon rule set: corners, straight walls and open rooms
    ///
    /// # Errors
    ///
    /// Never fails in practice; the presets pass validation.
    pub fn dungeon() -> Result<Self> {
        Self::new(vec![
            Pattern::new(
                "Wall_Corner",
                W,
                10,
                [W, W, W, W, W, W, W, E],
                RotationSet::all(),
            ),
            Pattern::new(
                "Empty_Corner",
                E,
                10,
                [W, W, W, W, E, W, E, E],
                RotationSet::all(),
            ),
            Pattern::new("Wall", W, 20, [W, W, E, W, E, W, W, E], RotationSet::all()),
            Pattern::new(
                "Empty_Wall",
                E,
                20,
                [W, E, E, W, E, W, E, E],
                RotationSet::all(),
            ),
            Pattern::new("Room", E, 30, [E; 8], RotationSet::identity()),
        ])
    }

    /// Patterns in catalog order
    pub const fn patterns(&self) -> &[Pattern] {
        self.patterns.as_slice()
    }

    /// Iterate patterns in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    /// Number of patterns
    pub const fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always false for a validated catalog
    pub const fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Look up a pattern by id
    pub fn get(&self, id: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|pattern| pattern.id == id)
    }

    /// Total weight each output tile could receive if every rotation matched
    pub fn weight_mass(&self) -> [u64; TileType::COUNT] {
        let mut mass = [0u64; TileType::COUNT];
        for pattern in &self.patterns {
            if let Some(slot) = mass.get_mut(pattern.output.index()) {
                *slot += u64::from(pattern.weight) * pattern.rotations.len() as u64;
            }
        }
        mass
    }
}

impl<'a> IntoIterator for &'a PatternCatalog {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}
