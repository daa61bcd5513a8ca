use rand::Rng;
use rand::seq::SliceRandom;

pub const CELEBRATIONS: [&str; 6] = [
    "🎉 Fantastic!",
    "🌟 Amazing!",
    "🚀 Brilliant!",
    "⭐ Perfect!",
    "🏆 Excellent!",
    "💫 Superb!",
];

pub fn celebration<R: Rng>(rng: &mut R) -> &'static str {
    CELEBRATIONS.choose(rng).copied().unwrap_or(CELEBRATIONS[0])
}

/// Encouragement band picked from the final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Perfect,
    Outstanding,
    Great,
    Good,
    NiceTry,
    KeepGoing,
}

impl Tier {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            100.. => Tier::Perfect,
            90..=99 => Tier::Outstanding,
            80..=89 => Tier::Great,
            70..=79 => Tier::Good,
            60..=69 => Tier::NiceTry,
            _ => Tier::KeepGoing,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Tier::Perfect => "🏆 PERFECT SCORE! You're a times table champion! 🏆",
            Tier::Outstanding => "⭐ Outstanding! You're brilliant at this! ⭐",
            Tier::Great => "🌟 Great job! You're doing really well! 🌟",
            Tier::Good => "👍 Good effort! Keep practicing! 👍",
            Tier::NiceTry => "💪 Nice try! Practice makes perfect! 💪",
            Tier::KeepGoing => "🌈 Keep going! You'll get better with practice! 🌈",
        }
    }
}

/// Rounded percentage, halves rounding up. `total` must be non-zero.
pub fn percentage(score: u32, total: u32) -> u32 {
    debug_assert!(total > 0);
    let (score, total) = (u64::from(score), u64::from(total.max(1)));
    ((200 * score + total) / (2 * total)) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
    pub tier: Tier,
}

impl ScoreSummary {
    pub fn new(score: u32, total: u32) -> Self {
        let percentage = percentage(score, total);
        Self {
            score,
            total,
            percentage,
            tier: Tier::from_percentage(percentage),
        }
    }

    pub fn message(&self) -> &'static str {
        self.tier.message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_percentage_examples() {
        assert_eq!(percentage(7, 10), 70);
        assert_eq!(percentage(10, 10), 100);
        assert_eq!(percentage(0, 4), 0);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(1, 8), 13); // 12.5 rounds up
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(Tier::from_percentage(100), Tier::Perfect);
        assert_eq!(Tier::from_percentage(99), Tier::Outstanding);
        assert_eq!(Tier::from_percentage(90), Tier::Outstanding);
        assert_eq!(Tier::from_percentage(89), Tier::Great);
        assert_eq!(Tier::from_percentage(80), Tier::Great);
        assert_eq!(Tier::from_percentage(70), Tier::Good);
        assert_eq!(Tier::from_percentage(60), Tier::NiceTry);
        assert_eq!(Tier::from_percentage(59), Tier::KeepGoing);
        assert_eq!(Tier::from_percentage(0), Tier::KeepGoing);
    }

    #[test]
    fn test_near_perfect_is_not_perfect() {
        // 199/200 = 99.5% rounds to 100 and earns the top tier, 99.4% does not.
        assert_eq!(ScoreSummary::new(199, 200).tier, Tier::Perfect);
        assert_eq!(ScoreSummary::new(497, 500).tier, Tier::Outstanding);
    }

    #[test]
    fn test_summary_message() {
        let summary = ScoreSummary::new(7, 10);
        assert_eq!(summary.percentage, 70);
        assert_eq!(summary.message(), "👍 Good effort! Keep practicing! 👍");
    }

    #[test]
    fn test_celebration_comes_from_the_list() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert!(CELEBRATIONS.contains(&celebration(&mut rng)));
        }
    }
}
