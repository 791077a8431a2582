//! Admin view: load, delete, purge

use super::state::{App, CurrentScreen};
use crate::services::{AdminPage, DeleteReport};

impl App {
    /// Page load: admin check, then the list.
    pub async fn open_admin(&mut self) {
        let service = match self.ctx.admin_service().await {
            Ok(service) => service,
            Err(e) => return self.init_failed(e),
        };
        match service.load().await {
            Ok(page) => self.show_admin_page(page),
            Err(e) => self.init_failed(e),
        }
    }

    pub async fn refresh_records(&mut self) {
        let service = match self.ctx.admin_service().await {
            Ok(service) => service,
            Err(e) => return self.init_failed(e),
        };
        let page = service.refresh().await;
        self.show_admin_page(page);
    }

    fn show_admin_page(&mut self, page: AdminPage) {
        match page {
            AdminPage::NeedsLogin => {
                self.records = None;
                self.show_login();
            }
            AdminPage::Ready(view) => {
                if !view.search_enabled() {
                    self.search_focused = false;
                    self.search_input.clear();
                }
                self.records = Some(view);
                self.clamp_selection();
                self.switch_to(CurrentScreen::Admin);
            }
            AdminPage::Unavailable(notice) => {
                self.records = None;
                self.set_notice(notice);
                self.switch_to(CurrentScreen::Admin);
            }
        }
    }

    /// Delete the highlighted row.
    pub async fn delete_selected(&mut self) {
        let Some(short_key) = self
            .records
            .as_ref()
            .and_then(|view| view.delete_target(self.selected_index))
            .map(str::to_string)
        else {
            return;
        };
        let service = match self.ctx.admin_service().await {
            Ok(service) => service,
            Err(e) => return self.init_failed(e),
        };
        let report = service.delete_by_row(&short_key).await;
        self.apply_delete(report);
    }

    /// Enter in the search field.
    pub async fn delete_by_search(&mut self) {
        if !self.records.as_ref().is_some_and(|view| view.search_enabled()) {
            return;
        }
        let service = match self.ctx.admin_service().await {
            Ok(service) => service,
            Err(e) => return self.init_failed(e),
        };
        let Some(report) = service.delete_by_search(&self.search_input).await else {
            return;
        };
        // 提交后无论结果都清空
        self.search_input.clear();
        self.apply_delete(report);
    }

    fn apply_delete(&mut self, report: DeleteReport) {
        match report.outcome.notice {
            Some(notice) => self.set_notice(notice),
            None if report.deleted => self.clear_notice(),
            None => {}
        }
        if let Some(page) = report.refreshed {
            self.show_admin_page(page);
        }
    }

    /// No confirmation step.
    pub async fn purge(&mut self) {
        let service = match self.ctx.admin_service().await {
            Ok(service) => service,
            Err(e) => return self.init_failed(e),
        };
        let outcome = service.purge_all().await;
        self.apply_outcome(outcome).await;
    }
}
