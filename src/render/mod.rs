mod escape;

pub use escape::{escape_attr, escape_html};

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_TOTAL_SCORE, TAG_GROUP_LIMIT};
use crate::types::RankedAgent;

/// Output of one render pass, applied wholesale to the host document. No
/// diffing, pagination, or partial updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOutput {
    pub cards_html: String,
    pub count_label: String,
    pub matched: usize,
}

/// Result-count summary with singular/plural wording. Zero is plural.
pub fn count_label(matched: usize) -> String {
    if matched == 1 {
        "1 result".to_string()
    } else {
        format!("{matched} results")
    }
}

pub fn render_cards(rows: &[RankedAgent<'_>]) -> String {
    rows.iter().map(card_html).collect()
}

/// Builds one display card. All dataset text lands in the markup escaped.
/// The readiness bar percentage is clamped to 0-100 while the raw total is
/// displayed as-is.
pub fn card_html(row: &RankedAgent<'_>) -> String {
    let agent = row.agent;

    let badges: String = agent
        .badges
        .iter()
        .map(|badge| format!(r#"<div class="badge">{}</div>"#, escape_html(badge)))
        .collect();

    let pct = ((row.total / MAX_TOTAL_SCORE) * 100.0).round().clamp(0.0, 100.0) as i64;

    let tags: String = agent
        .deployment
        .iter()
        .take(TAG_GROUP_LIMIT)
        .chain(agent.sectors.iter().take(TAG_GROUP_LIMIT))
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, escape_html(tag)))
        .collect();

    let profile = agent
        .profile_url
        .as_deref()
        .map(|url| format!(r#"<a href="{}">Profile</a>"#, escape_attr(url)))
        .unwrap_or_default();

    format!(
        r#"<div class="card">
  <div class="cardHead">
    <div>
      <h3 class="name">{name}</h3>
      <div class="small">{category} &bull; {tier}</div>
    </div>
    <div class="badges">{badges}</div>
  </div>
  <div class="scoreWrap">
    <div class="score">GCC Readiness: <strong>{total}</strong>/25</div>
    <div class="bar" aria-label="readiness bar">
      <div class="fill" style="width:{pct}%;"></div>
    </div>
  </div>
  <p class="brief">{brief}</p>
  <div class="tags">{tags}</div>
  <div class="links">
    <a href="{website}" target="_blank" rel="noopener">Website</a>{profile}
  </div>
</div>
"#,
        name = escape_html(&agent.name),
        category = escape_html(&agent.category),
        tier = escape_html(row.tier.label()),
        badges = badges,
        total = format_total(row.total),
        pct = pct,
        brief = escape_html(agent.sentinel_brief.as_deref().unwrap_or("")),
        tags = tags,
        website = escape_attr(agent.website.as_deref().unwrap_or("")),
        profile = profile,
    )
}

/// Whole totals print without a fractional part, matching the dataset's
/// integer sub-scores.
fn format_total(total: f64) -> String {
    if total.fract() == 0.0 {
        format!("{}", total as i64)
    } else {
        format!("{total}")
    }
}
