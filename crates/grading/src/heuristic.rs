//! Quality-to-price heuristic.
//!
//! Every participating metric value lands in one of three buckets keyed by
//! the *value* (not by whatever grade name the key carries): above 60 →
//! Premium, above 40 → Standard, else Economy. The winning bucket is the one
//! with the highest accumulated sum; ties break in declaration order
//! (Premium, Standard, Economy). This is a deliberately simplistic
//! heuristic, not a statistically principled classifier.

use rand::Rng;

use canemart_core::{Percentage, QualityGrade};

use crate::report::{GradingError, PredictionReport};

/// Suggested price jitter, inclusive both ends.
pub const JITTER_RANGE: (i64, i64) = (-25, 25);

/// Base price per grade, in whole rupees per ton.
pub const fn base_price(grade: QualityGrade) -> u64 {
    match grade {
        QualityGrade::Premium => 2800,
        QualityGrade::Standard => 2650,
        QualityGrade::Economy => 2500,
    }
}

/// The heuristic's output: a grade and a jittered suggested price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeAssessment {
    pub grade: QualityGrade,
    pub suggested_price: u64,
}

/// Grade a validated report and derive a suggested price.
///
/// A report with no participating metrics grades as `Standard` (the
/// documented fallback, not an error). A participating metric whose value is
/// not percentage-like is a schema error.
pub fn assess<R: Rng + ?Sized>(
    report: &PredictionReport,
    rng: &mut R,
) -> Result<GradeAssessment, GradingError> {
    let grade = predominant_grade(report)?;
    let jitter = rng.gen_range(JITTER_RANGE.0..=JITTER_RANGE.1);
    let suggested_price = base_price(grade).saturating_add_signed(jitter);

    Ok(GradeAssessment {
        grade,
        suggested_price,
    })
}

fn predominant_grade(report: &PredictionReport) -> Result<QualityGrade, GradingError> {
    let mut sums = [0.0f64; 3];
    let mut participated = false;

    for (key, value) in report.grading_metrics() {
        let pct = Percentage::parse(value).map_err(|_| {
            GradingError::Schema(format!("metric {key:?} is not a percentage: {value:?}"))
        })?;
        participated = true;

        let bucket = if pct.value() > 60.0 {
            QualityGrade::Premium
        } else if pct.value() > 40.0 {
            QualityGrade::Standard
        } else {
            QualityGrade::Economy
        };
        sums[bucket_index(bucket)] += pct.value();
    }

    if !participated {
        return Ok(QualityGrade::Standard);
    }

    // Highest sum wins; ties resolve in declaration order.
    let mut winner = QualityGrade::Premium;
    for grade in QualityGrade::ALL {
        if sums[bucket_index(grade)] > sums[bucket_index(winner)] {
            winner = grade;
        }
    }
    Ok(winner)
}

fn bucket_index(grade: QualityGrade) -> usize {
    match grade {
        QualityGrade::Premium => 0,
        QualityGrade::Standard => 1,
        QualityGrade::Economy => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn quality_grade_72_percent_is_premium() {
        let report = PredictionReport::from_pairs([("QualityGrade", "72%")]);
        let out = assess(&report, &mut rng()).unwrap();
        assert_eq!(out.grade, QualityGrade::Premium);
        assert!((2775..=2825).contains(&out.suggested_price));
    }

    #[test]
    fn grade1_45_percent_is_standard() {
        let report = PredictionReport::from_pairs([("Grade1", "45%")]);
        let out = assess(&report, &mut rng()).unwrap();
        assert_eq!(out.grade, QualityGrade::Standard);
        assert!((2625..=2675).contains(&out.suggested_price));
    }

    #[test]
    fn empty_report_falls_back_to_standard() {
        let out = assess(&PredictionReport::empty(), &mut rng()).unwrap();
        assert_eq!(out.grade, QualityGrade::Standard);
        assert!((2625..=2675).contains(&out.suggested_price));
    }

    #[test]
    fn buckets_accumulate_by_value_not_key_name() {
        // The key says "Economy" but the value lands in the Premium bucket.
        let report = PredictionReport::from_pairs([("EconomyGrade", "90%")]);
        let out = assess(&report, &mut rng()).unwrap();
        assert_eq!(out.grade, QualityGrade::Premium);
    }

    #[test]
    fn highest_accumulated_sum_wins() {
        // Premium bucket: 65. Standard bucket: 45 + 50 = 95.
        let report = PredictionReport::from_pairs([
            ("Grade1", "65%"),
            ("Grade2", "45%"),
            ("Grade3", "50%"),
        ]);
        let out = assess(&report, &mut rng()).unwrap();
        assert_eq!(out.grade, QualityGrade::Standard);
    }

    #[test]
    fn ties_break_in_declaration_order() {
        // 50 in Standard vs 30+20 in Economy: both 50, Standard declared first.
        let report = PredictionReport::from_pairs([
            ("Grade1", "50%"),
            ("Grade2", "30%"),
            ("Grade3", "20%"),
        ]);
        let out = assess(&report, &mut rng()).unwrap();
        assert_eq!(out.grade, QualityGrade::Standard);
    }

    #[test]
    fn non_participating_metrics_are_ignored() {
        let report = PredictionReport::from_pairs([("Moisture", "garbage"), ("Fibre", "12")]);
        let out = assess(&report, &mut rng()).unwrap();
        assert_eq!(out.grade, QualityGrade::Standard);
    }

    #[test]
    fn unparseable_participating_metric_is_a_schema_error() {
        let report = PredictionReport::from_pairs([("QualityGrade", "very good")]);
        assert!(matches!(
            assess(&report, &mut rng()),
            Err(GradingError::Schema(_))
        ));
    }

    #[test]
    fn jitter_stays_within_bounds_across_many_draws() {
        let report = PredictionReport::from_pairs([("QualityGrade", "72%")]);
        let mut rng = rng();
        for _ in 0..200 {
            let out = assess(&report, &mut rng).unwrap();
            assert!((2775..=2825).contains(&out.suggested_price));
        }
    }
}
