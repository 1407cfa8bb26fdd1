//! System context handed to the text-generation service.

use crate::error::Result;
use crate::record::CheckInRecord;

/// Builds the system instruction for one assistant request.
///
/// Embeds the election date and a JSON snapshot of every record so the model
/// can answer questions about today's check-ins.
pub fn build_system_context(election_date: &str, records: &[CheckInRecord]) -> Result<String> {
    let snapshot = serde_json::to_string(records)?;
    Ok(format!(
        "You are an AI assistant for the Registrar of Voters office.\n\
         The current election date is {election_date}.\n\
         Here are the current check-in records for today: {snapshot}.\n\
         Answer questions concisely and professionally about voting regulations, \
         station status, or these specific records."
    ))
}
