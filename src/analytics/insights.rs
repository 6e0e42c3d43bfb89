//! Human-readable statements about an analysis

use crate::models::HypePhase;

/// Three statements characterizing each phase
fn phase_statements(phase: HypePhase) -> &'static [&'static str] {
    match phase {
        HypePhase::PreInnovationTrigger => &[],
        HypePhase::InnovationTrigger => &[
            "Emerging technology with growth potential",
            "High risk: few demonstrated use cases",
            "Good moment for research and experimentation",
        ],
        HypePhase::PeakOfInflatedExpectations => &[
            "Media expectations are at their highest",
            "A decline is likely within the next 2-3 years",
            "Be wary of speculative investment",
        ],
        HypePhase::TroughOfDisillusionment => &[
            "Disillusionment phase: expectations are becoming realistic",
            "Good moment for long-term investment",
            "Focus on practical, viable use cases",
        ],
        HypePhase::SlopeOfEnlightenment => &[
            "The technology is maturing gradually",
            "Clearer use cases with demonstrated benefits",
            "Steady growth in enterprise adoption",
        ],
        HypePhase::PlateauOfProductivity => &[
            "Mature, widely adopted technology",
            "Demonstrated ROI with controlled risk",
            "Focus on optimization and efficiency",
        ],
    }
}

/// Render bullets for a verdict and its coverage metrics
pub fn generate_insights(
    phase: HypePhase,
    confidence: f64,
    total_mentions: usize,
    avg_sentiment: f64,
) -> Vec<String> {
    let mut insights: Vec<String> = phase_statements(phase).iter().map(|s| s.to_string()).collect();

    insights.push(
        if confidence > 0.8 {
            "High confidence in the analysis"
        } else if confidence > 0.6 {
            "Moderate confidence in the analysis"
        } else {
            "Limited confidence: more data is needed"
        }
        .to_string(),
    );

    insights.push(if total_mentions > 200 {
        format!("High media activity: {total_mentions} mentions")
    } else if total_mentions > 50 {
        format!("Moderate media activity: {total_mentions} mentions")
    } else {
        format!("Low media activity: {total_mentions} mentions")
    });

    insights.push(
        if avg_sentiment > 0.3 {
            "Overall media sentiment is positive"
        } else if avg_sentiment < -0.3 {
            "Overall media sentiment is negative"
        } else {
            "Overall media sentiment is neutral"
        }
        .to_string(),
    );

    insights
}
