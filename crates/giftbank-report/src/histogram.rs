//! Text histogram of a profile.

use giftbank_core::profile::Profile;

/// Width of the longest bar.
pub const MAX_BAR_WIDTH: usize = 50;

const LABEL_WIDTH: usize = 20;

/// Render one bar per kind, scaled so the largest count spans
/// [`MAX_BAR_WIDTH`] cells.
pub fn render_histogram(profile: &Profile) -> String {
    let max = profile.max_count();

    profile
        .iter()
        .map(|(kind, count)| {
            let width = if max == 0 {
                0
            } else {
                (count as f64 / max as f64 * MAX_BAR_WIDTH as f64).round() as usize
            };
            format!(
                "{:<LABEL_WIDTH$} {} ({count})",
                kind.label(),
                "█".repeat(width)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_count_fills_the_bar() {
        let profile = Profile {
            multiple_choice: 4,
            true_false: 2,
            ..Profile::default()
        };
        let text = render_histogram(&profile);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].matches('█').count(), MAX_BAR_WIDTH);
        assert_eq!(lines[1].matches('█').count(), MAX_BAR_WIDTH / 2);
        assert!(lines[0].starts_with("multiple choice      "));
        assert!(lines[0].ends_with("(4)"));
        assert!(lines[5].ends_with(" (0)"));
    }

    #[test]
    fn empty_profile_has_no_bars() {
        let text = render_histogram(&Profile::default());
        assert!(!text.contains('█'));
        assert_eq!(text.lines().count(), 6);
    }
}
