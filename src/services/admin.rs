//! Admin record management
//!
//! The record list is never cached: every render comes straight from the
//! last `get_all_records` response, and every mutation is followed by a
//! fresh fetch.

use tracing::{error, info, instrument, warn};

use super::messages;
use super::outcome::{Navigation, Notice, Outcome};
use super::redirect::StaticPage;
use crate::client::{ApiClient, Record, Reply};
use crate::errors::Result;
use crate::utils::remove_base_url_if_exist;

/// Rendered record list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordsView {
    /// Shows `NO_RECORDS` and disables the search/delete input.
    Empty,
    /// One row per record, in server order.
    Grid(Vec<Record>),
}

impl RecordsView {
    pub const EMPTY_MESSAGE: &'static str = messages::NO_RECORDS;

    fn from_records(records: Vec<Record>) -> Self {
        if records.is_empty() {
            RecordsView::Empty
        } else {
            RecordsView::Grid(records)
        }
    }

    /// Whether the search/delete input accepts text.
    pub fn search_enabled(&self) -> bool {
        matches!(self, RecordsView::Grid(_))
    }

    pub fn records(&self) -> &[Record] {
        match self {
            RecordsView::Empty => &[],
            RecordsView::Grid(records) => records,
        }
    }

    /// Short key the delete action of row `index` is bound to.
    pub fn delete_target(&self, index: usize) -> Option<&str> {
        self.records().get(index).map(|r| r.short_key.as_str())
    }
}

/// State of the admin page after a (re)load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminPage {
    /// Not an admin or the session expired; go to `/login/`.
    NeedsLogin,
    Ready(RecordsView),
    /// Records could not be fetched.
    Unavailable(Notice),
}

impl AdminPage {
    pub fn navigation(&self) -> Option<Navigation> {
        matches!(self, AdminPage::NeedsLogin).then_some(Navigation::Page(StaticPage::Login))
    }
}

/// Which control triggered a delete; only changes the messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOrigin {
    Search,
    Row,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReport {
    /// The backend confirmed the deletion.
    pub deleted: bool,
    pub outcome: Outcome,
    /// List fetched after the delete resolved. `None` when the delete call
    /// itself failed at the transport layer.
    pub refreshed: Option<AdminPage>,
}

pub struct AdminService {
    client: ApiClient,
}

impl AdminService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Page load: admin check, then the record list.
    ///
    /// Errors here (transport, schema) are initialization failures.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<AdminPage> {
        if !self.client.admin_check().await? {
            info!("Not an admin, redirecting to login");
            return Ok(AdminPage::NeedsLogin);
        }
        Ok(self.refresh().await)
    }

    /// Fetch the record list again.
    pub async fn refresh(&self) -> AdminPage {
        match self.client.get_all_records().await {
            Ok(Reply::Accepted(records)) => {
                AdminPage::Ready(RecordsView::from_records(records))
            }
            Ok(Reply::Rejected(_)) => {
                info!("Session expired while listing records");
                AdminPage::NeedsLogin
            }
            Err(e) => {
                error!("Error getting all records: {}", e);
                AdminPage::Unavailable(Notice::error(messages::RECORDS_ERROR))
            }
        }
    }

    /// Delete every record. No confirmation is asked.
    #[instrument(skip(self))]
    pub async fn purge_all(&self) -> Outcome {
        match self.client.purge_all_records().await {
            Ok(Reply::Accepted(())) => {
                warn!("All records purged");
                Outcome::notice(Notice::success(messages::PURGED)).then(Navigation::Reload)
            }
            Ok(Reply::Rejected(_)) => Outcome::notice(Notice::error(messages::PURGE_FAILED)),
            Err(e) => {
                error!("Error purging all records: {}", e);
                Outcome::notice(Notice::error(messages::PURGE_ERROR))
            }
        }
    }

    /// Delete from a grid row.
    pub async fn delete_by_row(&self, short_key: &str) -> DeleteReport {
        self.delete(short_key, DeleteOrigin::Row).await
    }

    /// Delete from the search field. Blank input does nothing (`None`).
    pub async fn delete_by_search(&self, input: &str) -> Option<DeleteReport> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        Some(self.delete(input, DeleteOrigin::Search).await)
    }

    #[instrument(skip(self))]
    async fn delete(&self, target: &str, origin: DeleteOrigin) -> DeleteReport {
        let target = remove_base_url_if_exist(self.client.hostname(), target);

        let deleted = match self.client.delete_record(&target).await {
            Ok(reply) => reply.is_accepted(),
            Err(e) => {
                error!("Error deleting record {}: {}", target, e);
                return DeleteReport {
                    deleted: false,
                    outcome: Outcome::notice(Notice::error(messages::DELETE_ERROR)),
                    refreshed: None,
                };
            }
        };

        let notice = match (deleted, origin) {
            (true, DeleteOrigin::Search) => Some(Notice::success(messages::RECORD_DELETED)),
            (true, DeleteOrigin::Row) => None,
            (false, DeleteOrigin::Search) => Some(Notice::warning(messages::RECORD_MISSING)),
            (false, DeleteOrigin::Row) => Some(Notice::error(messages::ROW_DELETE_FAILED)),
        };
        if deleted {
            info!("Deleted record {}", target);
        }

        // 删除返回后才刷新
        let refreshed = self.refresh().await;
        DeleteReport {
            deleted,
            outcome: Outcome {
                notice,
                navigation: refreshed.navigation(),
            },
            refreshed: Some(refreshed),
        }
    }
}
