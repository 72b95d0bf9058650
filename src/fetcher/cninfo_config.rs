//! cninfo portal configuration
//!
//! Endpoints, request headers and fixed form fields for the cninfo disclosure
//! portal. The portal rejects requests that do not look like they come from a
//! browser on its own site, so every request carries the headers below.

/// Announcement query endpoint (form-encoded POST, JSON response)
pub const QUERY_URL: &str = "https://www.cninfo.com.cn/new/hisAnnouncement/query";

/// Static host serving attachments at the server-relative `adjunctUrl`
pub const STATIC_BASE_URL: &str = "https://static.cninfo.com.cn/";

/// Desktop browser user agent
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Accept header sent with every request
pub const ACCEPT: &str = "application/json, text/javascript, */*; q=0.01";

/// Accept-Language header sent with every request
pub const ACCEPT_LANGUAGE: &str = "zh-CN,zh;q=0.9,en;q=0.8";

/// Origin header sent with every request
pub const ORIGIN: &str = "https://www.cninfo.com.cn";

/// Referer header sent with every request
pub const REFERER: &str = "https://www.cninfo.com.cn/";

/// `tabName` form field: full-text announcement search
pub const TAB_NAME: &str = "fulltext";

/// Build the absolute download URL for an attachment path
///
/// Exactly one slash separates host and path regardless of how either side is
/// written.
pub fn attachment_url(static_base_url: &str, attachment_path: &str) -> String {
    format!(
        "{}/{}",
        static_base_url.trim_end_matches('/'),
        attachment_path.trim_start_matches('/')
    )
}
