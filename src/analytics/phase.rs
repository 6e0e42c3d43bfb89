//! Phase classification
//!
//! An ordered list of guarded rules over the yearly series and its
//! inflection points. The first rule that yields a verdict wins; when none
//! does the technology is placed before the innovation trigger.
//!
//! | #  | Guard                                                      | Verdict                  |
//! |----|------------------------------------------------------------|--------------------------|
//! | 1  | trigger at most 1 year ago                                 | Innovation Trigger 0.85  |
//! | 2  | peak at most 1 year ago with sentiment above 0.2           | Peak 0.9                 |
//! | 3  | trough at most 1 year ago                                  | Trough 0.85              |
//! | 4  | trough 2 to 4 years ago                                    | Slope 0.8 / Trough 0.75  |
//! | 5  | trough more than 4 years ago                               | Plateau 0.85             |
//! | 6  | peak without trough                                        | Trough 0.7 / Peak 0.65   |
//! | 7  | trigger without peak                                       | Innovation Trigger 0.6   |
//! | 8  | no trigger, latest volume change beyond +/-30%             | Innovation 0.6 / Trough 0.55 |
//!
//! Rules 2 to 7 only apply once a trigger exists.

use tracing::debug;

use crate::models::{HypePhase, InflectionPoint, InflectionPoints, PhaseVerdict, YearlyStat};

/// Verdict when no rule applies
pub const FALLBACK_VERDICT: PhaseVerdict = PhaseVerdict {
    phase: HypePhase::PreInnovationTrigger,
    confidence: 0.5,
};

/// Everything a rule may look at
#[derive(Debug, Clone, Copy)]
pub struct PhaseContext<'a> {
    pub stats: &'a [YearlyStat],
    pub points: &'a InflectionPoints,
    pub current_year: i32,
}

impl PhaseContext<'_> {
    fn years_since(&self, point: &InflectionPoint) -> i32 {
        self.current_year - point.year
    }

    /// Trigger and peak, when both exist
    fn trigger_and_peak(&self) -> Option<(&InflectionPoint, &InflectionPoint)> {
        Some((self.points.innovation_trigger.as_ref()?, self.points.peak.as_ref()?))
    }

    /// Trough of a curve that has a trigger and a peak
    fn established_trough(&self) -> Option<&InflectionPoint> {
        self.trigger_and_peak()?;
        self.points.trough.as_ref()
    }
}

/// A named guard producing a verdict when it applies
struct PhaseRule {
    name: &'static str,
    evaluate: fn(&PhaseContext<'_>) -> Option<PhaseVerdict>,
}

const RULES: &[PhaseRule] = &[
    PhaseRule {
        name: "recent_trigger",
        evaluate: recent_trigger,
    },
    PhaseRule {
        name: "recent_enthusiastic_peak",
        evaluate: recent_enthusiastic_peak,
    },
    PhaseRule {
        name: "recent_trough",
        evaluate: recent_trough,
    },
    PhaseRule {
        name: "recovery_window",
        evaluate: recovery_window,
    },
    PhaseRule {
        name: "distant_trough",
        evaluate: distant_trough,
    },
    PhaseRule {
        name: "peak_without_trough",
        evaluate: peak_without_trough,
    },
    PhaseRule {
        name: "trigger_without_peak",
        evaluate: trigger_without_peak,
    },
    PhaseRule {
        name: "volume_momentum",
        evaluate: volume_momentum,
    },
];

fn recent_trigger(ctx: &PhaseContext<'_>) -> Option<PhaseVerdict> {
    let trigger = ctx.points.innovation_trigger.as_ref()?;
    (ctx.years_since(trigger) <= 1).then(|| PhaseVerdict::new(HypePhase::InnovationTrigger, 0.85))
}

fn recent_enthusiastic_peak(ctx: &PhaseContext<'_>) -> Option<PhaseVerdict> {
    let (_, peak) = ctx.trigger_and_peak()?;
    (ctx.years_since(peak) <= 1 && peak.sentiment > 0.2)
        .then(|| PhaseVerdict::new(HypePhase::PeakOfInflatedExpectations, 0.9))
}

fn recent_trough(ctx: &PhaseContext<'_>) -> Option<PhaseVerdict> {
    let trough = ctx.established_trough()?;
    (ctx.years_since(trough) <= 1)
        .then(|| PhaseVerdict::new(HypePhase::TroughOfDisillusionment, 0.85))
}

fn recovery_window(ctx: &PhaseContext<'_>) -> Option<PhaseVerdict> {
    let trough = ctx.established_trough()?;
    let since = ctx.years_since(trough);
    if !(2..=4).contains(&since) {
        return None;
    }

    let since_trough: Vec<&YearlyStat> = ctx.stats.iter().filter(|s| s.year >= trough.year).collect();
    if since_trough.len() > 1 {
        let recent = &since_trough[since_trough.len() - 2..];
        let trend = recent
            .iter()
            .map(|s| s.mention_change.unwrap_or(0.0))
            .sum::<f64>()
            / recent.len() as f64;

        if trend > 0.0 {
            return Some(PhaseVerdict::new(HypePhase::SlopeOfEnlightenment, 0.8));
        }
    }

    Some(PhaseVerdict::new(HypePhase::TroughOfDisillusionment, 0.75))
}

fn distant_trough(ctx: &PhaseContext<'_>) -> Option<PhaseVerdict> {
    let trough = ctx.established_trough()?;
    (ctx.years_since(trough) > 4).then(|| PhaseVerdict::new(HypePhase::PlateauOfProductivity, 0.85))
}

fn peak_without_trough(ctx: &PhaseContext<'_>) -> Option<PhaseVerdict> {
    let (_, peak) = ctx.trigger_and_peak()?;
    if ctx.points.trough.is_some() {
        return None;
    }

    Some(if ctx.years_since(peak) > 2 {
        PhaseVerdict::new(HypePhase::TroughOfDisillusionment, 0.7)
    } else {
        PhaseVerdict::new(HypePhase::PeakOfInflatedExpectations, 0.65)
    })
}

fn trigger_without_peak(ctx: &PhaseContext<'_>) -> Option<PhaseVerdict> {
    let trigger = ctx.points.innovation_trigger.as_ref()?;
    (ctx.points.peak.is_none() && ctx.years_since(trigger) > 1)
        .then(|| PhaseVerdict::new(HypePhase::InnovationTrigger, 0.6))
}

fn volume_momentum(ctx: &PhaseContext<'_>) -> Option<PhaseVerdict> {
    if ctx.points.innovation_trigger.is_some() {
        return None;
    }

    let latest = ctx.stats.last()?;
    let growth = if ctx.stats.len() > 1 {
        latest.mention_change.unwrap_or(0.0)
    } else {
        0.0
    };

    if growth > 0.3 && latest.sentiment_mean > 0.1 {
        Some(PhaseVerdict::new(HypePhase::InnovationTrigger, 0.6))
    } else if growth < -0.3 {
        Some(PhaseVerdict::new(HypePhase::TroughOfDisillusionment, 0.55))
    } else {
        None
    }
}

/// Place the series on the hype curve
pub fn classify_phase(ctx: &PhaseContext<'_>) -> PhaseVerdict {
    RULES
        .iter()
        .find_map(|rule| {
            let verdict = (rule.evaluate)(ctx)?;
            debug!(rule = rule.name, phase = %verdict.phase, confidence = verdict.confidence, "Phase rule matched");
            Some(verdict)
        })
        .unwrap_or(FALLBACK_VERDICT)
}
