//! 逐条删除

use zone_sweeper_client::{CloudflareClient, DnsRecord};

/// Outcome counts for one deletion batch.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DeleteSummary {
    pub deleted: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Delete `records` one at a time, in the order given.
///
/// Records without an identifier are skipped with a notice and never sent
/// to the API. A per-record failure — transport error or an API-reported
/// `success: false` — is written to stderr with the record's name and id,
/// and the batch continues. Nothing is retried or rolled back.
pub async fn delete_records(
    client: &CloudflareClient,
    zone_id: &str,
    records: &[DnsRecord],
) -> DeleteSummary {
    let mut summary = DeleteSummary::default();

    for record in records {
        if record.id.is_empty() {
            println!("Skipping record without ID: {} ({})", record.name, record.record_type);
            summary.skipped += 1;
            continue;
        }

        match client.delete_dns_record(zone_id, &record.id).await {
            Ok(()) => {
                println!("Deleted {} ({}).", record.name, record.id);
                summary.deleted += 1;
            }
            Err(e) => {
                eprintln!("Failed to delete {} ({}): {e}", record.name, record.id);
                summary.failed += 1;
            }
        }
    }

    summary
}
