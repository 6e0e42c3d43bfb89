//! Curve positions and chart series for rendering an analysis

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{HypePhase, InflectionPoints, YearlyStat};

/// Position on a 0-100 canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhasePosition {
    pub x: f64,
    pub y: f64,
}

/// Where an unrecognized phase name is drawn
pub const UNKNOWN_POSITION: PhasePosition = PhasePosition { x: 50.0, y: 50.0 };

const POSITIONS: &[(&str, PhasePosition)] = &[
    ("Pre-Innovation Trigger", PhasePosition { x: 5.0, y: 10.0 }),
    ("Innovation Trigger", PhasePosition { x: 15.0, y: 30.0 }),
    ("Peak of Inflated Expectations", PhasePosition { x: 30.0, y: 85.0 }),
    ("Trough of Disillusionment", PhasePosition { x: 55.0, y: 20.0 }),
    ("Slope of Enlightenment", PhasePosition { x: 75.0, y: 50.0 }),
    ("Plateau of Productivity", PhasePosition { x: 90.0, y: 65.0 }),
];

/// Position of a phase by display name, exact match
pub fn phase_position(phase: &str) -> PhasePosition {
    POSITIONS
        .iter()
        .find(|(name, _)| *name == phase)
        .map(|(_, position)| *position)
        .unwrap_or(UNKNOWN_POSITION)
}

/// Series and markers needed to draw the curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub yearly_mentions: BTreeMap<i32, usize>,
    pub yearly_sentiment: BTreeMap<i32, f64>,
    pub phase_position: PhasePosition,
    pub total_mentions: usize,
    pub inflection_points: InflectionPoints,
}

impl ChartData {
    pub fn build(
        stats: &[YearlyStat],
        phase: HypePhase,
        total_mentions: usize,
        inflection_points: InflectionPoints,
    ) -> Self {
        Self {
            yearly_mentions: stats.iter().map(|s| (s.year, s.mention_count)).collect(),
            yearly_sentiment: stats.iter().map(|s| (s.year, s.sentiment_mean)).collect(),
            phase_position: phase_position(phase.as_str()),
            total_mentions,
            inflection_points,
        }
    }
}
