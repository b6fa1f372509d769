use earcheck_core::model::AgeGroup;
use earcheck_core::scoring::Recommendation;
use services::ResultSummary;

/// Presentation model for the result gauge and copy.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultVm {
    summary: ResultSummary,
    age_group: Option<AgeGroup>,
}

impl ResultVm {
    #[must_use]
    pub fn new(summary: ResultSummary, age_group: Option<AgeGroup>) -> Self {
        Self { summary, age_group }
    }

    #[must_use]
    pub fn average(&self) -> u8 {
        self.summary.average
    }

    #[must_use]
    pub fn tier(&self) -> u8 {
        self.summary.tier
    }

    #[must_use]
    pub fn age_group(&self) -> Option<AgeGroup> {
        self.age_group
    }

    #[must_use]
    pub fn recommendation(&self) -> Recommendation {
        self.summary.info.action
    }

    /// Headline split around the emphasised word.
    #[must_use]
    pub fn headline_parts(&self) -> (&'static str, &'static str, &'static str) {
        let info = self.summary.info;
        match info.headline.split_once(info.emphasis) {
            Some((before, after)) => (before, info.emphasis, after),
            None => (info.headline, "", ""),
        }
    }

    /// Needle rotation in degrees: -90 (far left) to 90 (far right),
    /// pointing at the center of the active gauge segment.
    #[must_use]
    pub fn needle_rotation_deg(&self) -> f64 {
        let tiers = f64::from(self.summary.tier_count);
        let tier = f64::from(self.summary.tier);
        -90.0 + (180.0 / tiers) * (tier - 0.5)
    }

    /// Active flag per gauge segment, left to right.
    #[must_use]
    pub fn segments(&self) -> Vec<bool> {
        (1..=self.summary.tier_count)
            .map(|segment| segment <= self.summary.tier)
            .collect()
    }

    /// Whether to surface the follow-up call to action. Tiers whose
    /// recommendation is just informational reading don't get one.
    #[must_use]
    pub fn show_cta(&self) -> bool {
        self.summary.info.action != Recommendation::ReadArticle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use earcheck_core::scoring::{tier_for, tier_info};
    use earcheck_core::tuning::TestTuning;

    fn vm_for(average: u8, tuning: TestTuning) -> ResultVm {
        let tier = tier_for(average, tuning.tier_count());
        ResultVm::new(
            ResultSummary {
                scores: [Some(average); 3],
                average,
                tier,
                tier_count: tuning.tier_count(),
                info: tier_info(tier, tuning),
            },
            None,
        )
    }

    #[test]
    fn five_tier_needle_positions_match_gauge_centers() {
        let tuning = TestTuning::default();
        let expected = [-72.0, -36.0, 0.0, 36.0, 72.0];
        for (tier, rotation) in (1..=5).zip(expected) {
            // pick an average squarely inside the tier
            let average = (tier * 20 - 10) as u8;
            let vm = vm_for(average, tuning);
            assert_eq!(vm.tier(), tier as u8);
            assert!((vm.needle_rotation_deg() - rotation).abs() < 1e-9);
        }
    }

    #[test]
    fn three_tier_needle_positions() {
        let tuning = TestTuning::new(2, 2, 3, 30_000).unwrap();
        let vm = vm_for(50, tuning);
        assert_eq!(vm.tier(), 2);
        assert!((vm.needle_rotation_deg() - 0.0).abs() < 1e-9);
    }

    #[test]
    fn segments_fill_up_to_the_tier() {
        let vm = vm_for(60, TestTuning::default());
        assert_eq!(vm.segments(), vec![true, true, true, false, false]);
    }

    #[test]
    fn cta_shown_for_low_and_mid_tiers_only() {
        let tuning = TestTuning::default();
        assert!(vm_for(10, tuning).show_cta());
        assert!(vm_for(50, tuning).show_cta());
        assert!(!vm_for(95, tuning).show_cta());
    }

    #[test]
    fn headline_splits_around_emphasis() {
        let vm = vm_for(95, TestTuning::default());
        let (before, emphasis, after) = vm.headline_parts();
        assert_eq!(before, "You have ");
        assert_eq!(emphasis, "excellent");
        assert_eq!(after, " hearing sensitivity");
    }
}
