//! Rendering of similar deals into the prompt payload.
//!
//! Limits: at most [`MAX_SIMILAR_DEALS`] deals, and per deal at most
//! [`MAX_ACTIVITIES_PER_DEAL`] activities examined with a cumulative budget of
//! [`MAX_ACTIVITY_CHARS`] characters of rendered activity lines.

use dealsense_core::models::activity::ActivityRecord;
use dealsense_core::models::deal::DealRecord;

pub const MAX_SIMILAR_DEALS: usize = 3;
pub const MAX_ACTIVITIES_PER_DEAL: usize = 5;
pub const MAX_ACTIVITY_CHARS: usize = 1500;

pub const NO_ACTIVITIES: &str = "  No activities available";
pub const NO_MEANINGFUL_ACTIVITIES: &str = "  No meaningful activities found";
pub const ACTIVITIES_TRUNCATED: &str = "  - [Additional activities truncated...]";
pub const AMOUNT_NOT_SPECIFIED: &str = "Not specified";

/// Render the first [`MAX_SIMILAR_DEALS`] deals, in input order, separated by
/// a blank line.
pub fn format_deals(deals: &[DealRecord]) -> String {
    deals
        .iter()
        .take(MAX_SIMILAR_DEALS)
        .enumerate()
        .map(|(i, deal)| format_deal(i + 1, deal))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render one deal block. `position` is 1-based.
pub fn format_deal(position: usize, deal: &DealRecord) -> String {
    let metadata = &deal.metadata;
    let mut lines = vec![
        format!("### Deal {position} (ID: {})", deal.display_id(position)),
        format!("- Outcome: {}", metadata.outcome()),
        format!("- Amount: {}", format_amount(metadata.deal_amount())),
        format!("- Stage: {}", metadata.deal_stage()),
        format!("- Total Activities: {}", deal.total_activities()),
    ];

    if !deal.activities.is_empty() {
        lines.push("- Activities:".to_string());
        lines.push(format_activities(&deal.activities));
    }

    lines.join("\n")
}

/// Render a deal's activities within the count and character budget.
///
/// Entries with blank content are skipped but still count toward the
/// [`MAX_ACTIVITIES_PER_DEAL`] examined. Content is trimmed, not shortened.
pub fn format_activities(activities: &[ActivityRecord]) -> String {
    if activities.is_empty() {
        return NO_ACTIVITIES.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut total_chars = 0;

    for activity in activities.iter().take(MAX_ACTIVITIES_PER_DEAL) {
        let content = activity.content().trim();
        if content.is_empty() {
            continue;
        }

        let line = format!(
            "  - {}: {}",
            activity.activity_type().to_uppercase(),
            content
        );
        let line_chars = line.chars().count();

        if total_chars + line_chars > MAX_ACTIVITY_CHARS {
            lines.push(ACTIVITIES_TRUNCATED.to_string());
            break;
        }

        total_chars += line_chars;
        lines.push(line);
    }

    if lines.is_empty() {
        NO_MEANINGFUL_ACTIVITIES.to_string()
    } else {
        lines.join("\n")
    }
}

/// `$1,234.50` for positive finite amounts, otherwise "Not specified".
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() || amount <= 0.0 {
        return AMOUNT_NOT_SPECIFIED.to_string();
    }

    let fixed = format!("{amount:.2}");
    // `{:.2}` of a finite value always has exactly one '.'.
    let Some((whole, cents)) = fixed.split_once('.') else {
        return format!("${fixed}");
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("${grouped}.{cents}")
}
