//! Plain-text rendering of command results

use league_core::CommandResult;

/// Feedback first, then any listing as 1-based `\t<i>. <item>` lines
pub fn render(result: &CommandResult) -> String {
    let mut out = result.feedback_to_user.clone();
    if let Some(listing) = result.relevant() {
        for (index, item) in listing.render_items().iter().enumerate() {
            out.push_str(&format!("\n\t{}. {item}", index + 1));
        }
    }
    out
}
