//! User-facing copy for the sign-in and home screens (vi-VN only).

/// Inline field error while the typed number is invalid.
pub const INVALID_PHONE_NUMBER: &str = "Số điện thoại không hợp lệ.";

pub const HOME_TITLE: &str = "Chào mừng đến với HomeScreen";
const HOME_PHONE_LINE_PREFIX: &str = "Số điện thoại đã đăng nhập: ";

/// Blocking dialog content shown by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: &'static str,
}

/// Shown after the session has been stored.
pub const SIGN_IN_SUCCESS_ALERT: Alert = Alert {
    title: "Thông báo",
    message: "Đăng nhập thành công",
};

/// Shown when a submit is attempted with a malformed number.
pub const INVALID_FORMAT_ALERT: Alert = Alert {
    title: "Lỗi",
    message: "Số điện thoại không đúng định dạng. Vui lòng nhập lại!",
};

/// Home display line for the stored number (blank value allowed).
pub fn home_phone_line(phone_number: &str) -> String {
    format!("{HOME_PHONE_LINE_PREFIX}{phone_number}")
}
