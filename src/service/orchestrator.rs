use std::fs::File;

use serde::Deserialize;

use crate::domain::{InvalidPurchase, PurchaseSummary, PurchaseViolation, TicketTypeRequest};
use crate::service::{TicketService, boot};

/// CSV row structure (flat deserialization)
#[derive(Debug, Deserialize)]
struct CsvRow {
    account: u64,
    #[serde(rename = "type")]
    ticket_type: String,
    count: i64,
}

/// One decoded request line together with the account it belongs to.
#[derive(Debug, Clone, Copy)]
struct RequestLine {
    account: u64,
    request: TicketTypeRequest,
}

impl TryFrom<CsvRow> for RequestLine {
    type Error = InvalidPurchase;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        if row.ticket_type.trim().is_empty() {
            return Err(PurchaseViolation::MalformedRequest.into());
        }

        let ticket_type = row.ticket_type.parse()?;
        Ok(Self {
            account: row.account,
            request: TicketTypeRequest::new(ticket_type, row.count),
        })
    }
}

/// Batch driver for request files.
///
/// Rows are `account,type,count`; contiguous rows sharing an account form
/// one purchase. A purchase that breaks a rule is reported and skipped,
/// the rest of the file still goes through.
pub struct Orchestrator {
    service: TicketService,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self { service: boot() }
    }

    /// Create an Orchestrator around a custom service.
    ///
    /// ## Warning: This is NOT MEANT FOR PRODUCTION USE. Only for testing purposes.
    pub fn with_service(service: TicketService) -> Self {
        Self { service }
    }

    pub fn process_csv(
        &self,
        file_path: &str,
    ) -> Result<Vec<(u64, PurchaseSummary)>, Box<dyn std::error::Error>> {
        let file_handle = File::open(file_path)?;
        let mut rdr = csv::Reader::from_reader(file_handle);

        let mut summaries = Vec::new();
        let mut pending: Vec<TicketTypeRequest> = Vec::new();
        let mut current_account: Option<u64> = None;
        let mut line_num = 0;

        for result in rdr.deserialize() {
            line_num += 1;
            let row: CsvRow = result?;

            let line = match RequestLine::try_from(row) {
                Ok(line) => line,
                Err(e) => {
                    eprintln!("Error on line {}: {}", line_num, e);
                    continue;
                }
            };

            if current_account.is_some_and(|account| account != line.account) {
                self.flush(&mut current_account, &mut pending, &mut summaries);
            }

            current_account = Some(line.account);
            pending.push(line.request);
        }

        self.flush(&mut current_account, &mut pending, &mut summaries);

        Ok(summaries)
    }

    fn flush(
        &self,
        current_account: &mut Option<u64>,
        pending: &mut Vec<TicketTypeRequest>,
        summaries: &mut Vec<(u64, PurchaseSummary)>,
    ) {
        let Some(account) = current_account.take() else {
            return;
        };
        let requests = std::mem::take(pending);

        match self.service.purchase_tickets(account, &requests) {
            Ok(summary) => summaries.push((account, summary)),
            Err(e) => eprintln!("Error processing purchase for account {}: {}", account, e),
        }
    }

    /// Output purchase summaries as CSV to stdout, one row per purchase.
    pub fn output_csv(
        summaries: &[(u64, PurchaseSummary)],
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        wtr.write_record(["account", "quantity", "amount", "seats"])?;

        for (account, summary) in summaries {
            wtr.write_record([
                &account.to_string(),
                &summary.quantity.to_string(),
                &summary.amount.to_string(),
                &summary.seats.to_string(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}
