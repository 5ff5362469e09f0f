//! All statistics for one sender filter in a single serialisable value.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::analysis::emoji::emoji_frequency;
use crate::analysis::ranking::{
    Share, active_user_ranking, character_ranking, media_ranking, message_share,
};
use crate::analysis::summary::{CountSummary, count_summary};
use crate::analysis::table::Count;
use crate::analysis::timeline::{TemporalHistograms, temporal_histograms};
use crate::analysis::words::word_frequency;
use crate::analysis::{AggregationWarning, SenderFilter};
use crate::config::AnalysisConfig;
use crate::record::MessageRecord;

/// Sender rankings; only produced for [`SenderFilter::All`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Rankings {
    pub most_messages: Vec<Count<String>>,
    pub most_characters: Vec<Count<String>>,
    pub most_media: Vec<Count<String>>,
    pub message_share: Vec<Share>,
}

/// Result of [`analyze`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub filter: SenderFilter,
    pub summary: CountSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rankings: Option<Rankings>,
    pub timeline: TemporalHistograms,
    pub busiest_days: Vec<Count<NaiveDate>>,
    pub top_words: Vec<Count<String>>,
    pub top_emojis: Vec<Count<String>>,
    /// Non-fatal conditions; each one matches an empty table above
    pub warnings: Vec<AggregationWarning>,
}

impl Report {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Runs every aggregation over `records` for one filter.
///
/// Never fails: an empty selection, a chat without emoji or links, or one
/// whose words are all stopwords produce empty tables plus a warning.
///
/// ```rust
/// use chatstat::analysis::{AggregationWarning, SenderFilter, analyze};
/// use chatstat::config::AnalysisConfig;
/// use chatstat::parser::LogParser;
///
/// let raw = "01/01/23, 10:00 - Alice: pizza tonight?\n01/01/23, 10:05 - Bob: pizza 🍕";
/// let records = LogParser::new().parse_str(raw)?;
/// let report = analyze(&records, &SenderFilter::All, &AnalysisConfig::default());
///
/// assert_eq!(report.summary.total_messages, 2);
/// assert_eq!(report.top_words[0].key, "pizza");
/// assert_eq!(report.top_emojis[0].key, "🍕");
/// assert!(report.warnings.contains(&AggregationWarning::NoLinks));
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
pub fn analyze(records: &[MessageRecord], filter: &SenderFilter, config: &AnalysisConfig) -> Report {
    let summary = count_summary(records, filter);
    let mut warnings = Vec::new();

    if summary.total_messages == 0 {
        warnings.push(AggregationWarning::EmptySelection {
            filter: filter.to_string(),
        });
    }

    let rankings = filter.is_all().then(|| Rankings {
        most_messages: truncate(active_user_ranking(records, filter), config.top_senders),
        most_characters: truncate(character_ranking(records, filter), config.top_senders),
        most_media: truncate(media_ranking(records, filter), config.top_senders),
        message_share: message_share(records, filter),
    });

    let timeline = temporal_histograms(records, filter);
    let busiest_days = timeline.top_days(config.top_days);

    let words = word_frequency(records, filter, &config.stopwords);
    let emojis = emoji_frequency(records, filter);

    if summary.total_messages > 0 {
        if words.is_empty() {
            warnings.push(AggregationWarning::NoWords);
        }
        if emojis.is_empty() {
            warnings.push(AggregationWarning::NoEmoji);
        }
        if summary.total_links == 0 {
            warnings.push(AggregationWarning::NoLinks);
        }
    }

    for warning in &warnings {
        debug!(%filter, %warning, "aggregation warning");
    }
    info!(
        %filter,
        messages = summary.total_messages,
        distinct_words = words.len(),
        distinct_emoji = emojis.len(),
        "analysis complete"
    );

    Report {
        filter: filter.clone(),
        summary,
        rankings,
        timeline,
        busiest_days,
        top_words: words.top(config.top_words).to_vec(),
        top_emojis: emojis.top(config.top_emojis).to_vec(),
        warnings,
    }
}

fn truncate<T>(mut ranking: Vec<T>, n: usize) -> Vec<T> {
    ranking.truncate(n);
    ranking
}
