//! Backend endpoint table

use strum::{AsRefStr, EnumIter};

use super::transport::Method;

/// Every backend endpoint the front end talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Endpoint {
    AdminCheck,
    GetAllRecords,
    PurgeAllRecords,
    DeleteRecord,
    SearchRecord,
    CreateRecord,
    Login,
    Logout,
    ChangePass,
    Status,
}

/// API 路径前缀
pub const API_PREFIX: &str = "/api/v1";

impl Endpoint {
    /// Path below the hostname, e.g. `/api/v1/search_record`.
    pub fn path(&self) -> String {
        format!("{}/{}", API_PREFIX, self.as_ref())
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::AdminCheck
            | Endpoint::GetAllRecords
            | Endpoint::SearchRecord
            | Endpoint::Status => Method::Get,
            Endpoint::PurgeAllRecords | Endpoint::DeleteRecord => Method::Delete,
            Endpoint::CreateRecord | Endpoint::Login | Endpoint::Logout | Endpoint::ChangePass => {
                Method::Post
            }
        }
    }

    /// Whether the session cookie (and bearer token) must be sent.
    pub fn needs_credentials(&self) -> bool {
        !matches!(
            self,
            Endpoint::SearchRecord | Endpoint::CreateRecord | Endpoint::Status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_paths() {
        assert_eq!(Endpoint::AdminCheck.path(), "/api/v1/admin_check");
        assert_eq!(Endpoint::GetAllRecords.path(), "/api/v1/get_all_records");
        assert_eq!(Endpoint::PurgeAllRecords.path(), "/api/v1/purge_all_records");
        assert_eq!(Endpoint::DeleteRecord.path(), "/api/v1/delete_record");
        assert_eq!(Endpoint::SearchRecord.path(), "/api/v1/search_record");
        assert_eq!(Endpoint::CreateRecord.path(), "/api/v1/create_record");
        assert_eq!(Endpoint::Login.path(), "/api/v1/login");
        assert_eq!(Endpoint::Logout.path(), "/api/v1/logout");
        assert_eq!(Endpoint::ChangePass.path(), "/api/v1/change_pass");
        assert_eq!(Endpoint::Status.path(), "/api/v1/status");
    }

    #[test]
    fn test_methods() {
        assert_eq!(Endpoint::SearchRecord.method(), Method::Get);
        assert_eq!(Endpoint::DeleteRecord.method(), Method::Delete);
        assert_eq!(Endpoint::PurgeAllRecords.method(), Method::Delete);
        assert_eq!(Endpoint::CreateRecord.method(), Method::Post);
    }

    #[test]
    fn test_unauthenticated_endpoints() {
        let open: Vec<_> = Endpoint::iter()
            .filter(|e| !e.needs_credentials())
            .collect();
        assert_eq!(
            open,
            vec![Endpoint::SearchRecord, Endpoint::CreateRecord, Endpoint::Status]
        );
    }
}
