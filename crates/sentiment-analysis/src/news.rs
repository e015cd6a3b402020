use analysis_core::NewsItem;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Characters of the summary shown under a headline
pub const SUMMARY_PREVIEW_CHARS: usize = 120;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsDigestItem {
    pub headline: String,
    pub url: String,
    pub date: Option<NaiveDate>,
    pub date_label: String,
    pub summary_preview: Option<String>,
}

fn preview(summary: Option<&str>) -> Option<String> {
    let summary = summary.filter(|s| !s.is_empty())?;
    let mut out: String = summary.chars().take(SUMMARY_PREVIEW_CHARS).collect();
    out.push_str("...");
    Some(out)
}

/// Headlines in upstream order with a UTC publish date and a short preview.
pub fn news_digest(items: &[NewsItem]) -> Vec<NewsDigestItem> {
    items
        .iter()
        .map(|item| {
            let date = DateTime::<Utc>::from_timestamp(item.datetime, 0).map(|dt| dt.date_naive());
            if date.is_none() {
                tracing::debug!("News timestamp out of range: {}", item.datetime);
            }

            NewsDigestItem {
                headline: item.headline.clone(),
                url: item.url.clone(),
                date,
                date_label: date
                    .map(|d| d.format("%-m/%-d/%Y").to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
                summary_preview: preview(item.summary.as_deref()),
            }
        })
        .collect()
}
