// src/leads/service.rs

use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use crate::leads::models::{LeadSubmission, QuoteFields, QuoteForm};
use crate::leads::sink::{DynLeadSink, LeadError};
use crate::leads::validation::validate;

/// What happened to a quote request that did not hit a persistence error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteOutcome {
    /// Failed validation; nothing was written anywhere.
    Rejected(Vec<&'static str>),
    /// Written to every sink.
    Accepted(QuoteFields),
}

/// Trim, validate, then hand the lead to each sink in order.
///
/// The first sink error stops the pipeline and is returned as-is; sinks that
/// already succeeded are not rolled back.
pub async fn submit_quote(
    sinks: &[DynLeadSink],
    form: QuoteForm,
    source_address: String,
) -> Result<QuoteOutcome, LeadError> {
    let submission_id = Uuid::new_v4();
    let fields = QuoteFields::from(form);

    let errors = validate(&fields);
    if !errors.is_empty() {
        info!(
            "Quote {} rejected from page {} ({} problems)",
            submission_id,
            fields.page,
            errors.len()
        );
        return Ok(QuoteOutcome::Rejected(errors));
    }

    let lead = LeadSubmission {
        fields,
        submitted_at: Utc::now(),
        source_address,
    };

    for sink in sinks {
        if let Err(err) = sink.record_lead(&lead).await {
            error!(
                "Quote {} failed in {} sink: {:?}",
                submission_id,
                sink.name(),
                err
            );
            return Err(err);
        }
    }

    info!(
        "Quote {} accepted for {} in {}",
        submission_id, lead.fields.service, lead.fields.suburb
    );
    Ok(QuoteOutcome::Accepted(lead.fields))
}
