use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::errors::{ClientError, Result};

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

// 中国大陆手机号或带区号的座机号
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(1[3-9]\d{9}|0\d{2,3}-?\d{7,8})$").expect("Invalid phone regex")
});

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("Invalid time regex"));

/// 表单字段错误集合
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: Vec<(String, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push((field.to_string(), message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// 指定字段的错误
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|(f, _)| f.as_str()).collect()
    }

    pub fn into_result(self) -> std::result::Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{joined}")
    }
}

impl From<FieldErrors> for ClientError {
    fn from(errors: FieldErrors) -> Self {
        ClientError::validation(errors.to_string())
    }
}

/// 表单校验，失败时不发出请求
pub trait Validate {
    fn validate(&self) -> std::result::Result<(), FieldErrors>;

    fn check(&self) -> Result<()> {
        self.validate().map_err(ClientError::from)
    }
}

impl Validate for serde_json::Value {
    fn validate(&self) -> std::result::Result<(), FieldErrors> {
        Ok(())
    }
}

/// 必填文本
pub fn require_text(errors: &mut FieldErrors, field: &str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("{label}不能为空"));
    }
}

/// 可选手机号，填写时必须合法
pub fn check_optional_phone(errors: &mut FieldErrors, field: &str, value: Option<&str>) {
    if let Some(phone) = value.filter(|p| !p.trim().is_empty()) {
        if let Err(msg) = validate_phone(phone) {
            errors.add(field, msg);
        }
    }
}

/// 可选邮箱，填写时必须合法
pub fn check_optional_email(errors: &mut FieldErrors, field: &str, value: Option<&str>) {
    if let Some(email) = value.filter(|e| !e.trim().is_empty()) {
        if let Err(msg) = validate_email(email) {
            errors.add(field, msg);
        }
    }
}

/// 金额必须大于 0
pub fn require_positive(errors: &mut FieldErrors, field: &str, value: f64, label: &str) {
    if !value.is_finite() || value <= 0.0 {
        errors.add(field, format!("{label}必须大于 0"));
    }
}

/// 起止顺序校验
pub fn check_order<T: PartialOrd>(
    errors: &mut FieldErrors,
    field: &str,
    start: &T,
    end: &T,
    allow_equal: bool,
) {
    let ok = if allow_equal { start <= end } else { start < end };
    if !ok {
        errors.add(field, "结束时间必须晚于开始时间");
    }
}

pub fn validate_username(username: &str) -> std::result::Result<(), &'static str> {
    // 用户名长度校验：4 <= x <= 20
    if username.len() < 4 || username.len() > 20 {
        return Err("Username length must be between 4 and 20 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> std::result::Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> std::result::Result<(), &'static str> {
    if !PHONE_RE.is_match(phone.trim()) {
        return Err("Phone number format is invalid");
    }
    Ok(())
}

/// 校验 `HH:mm` 格式
pub fn validate_clock_time(value: &str) -> std::result::Result<(), &'static str> {
    if !TIME_RE.is_match(value) {
        return Err("Time must be in HH:mm format");
    }
    Ok(())
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// 简化的密码验证（写入字段错误）
pub fn check_password(errors: &mut FieldErrors, field: &str, password: &str) {
    let result = validate_password(password);
    if !result.is_valid {
        errors.add(field, result.error_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("SecurePass123").is_valid);
    }

    #[test]
    fn test_weak_password_lists_every_rule() {
        let result = validate_password("abc");
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 3);
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("13800138000").is_ok());
        assert!(validate_phone("010-12345678").is_ok());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("23800138000").is_err());
    }

    #[test]
    fn test_username_and_email() {
        assert!(validate_username("admin").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("bad name").is_err());
        assert!(validate_email("a@b.cn").is_ok());
        assert!(validate_email("no-at-sign").is_err());
    }

    #[test]
    fn test_clock_time() {
        assert!(validate_clock_time("08:30").is_ok());
        assert!(validate_clock_time("23:59").is_ok());
        assert!(validate_clock_time("24:00").is_err());
        assert!(validate_clock_time("8:30").is_err());
    }

    #[test]
    fn test_field_errors_display_and_conversion() {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "name", "  ", "姓名");
        require_positive(&mut errors, "amount", 0.0, "金额");
        check_order(&mut errors, "endDate", &3, &1, true);
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("name"), Some("姓名不能为空"));
        assert_eq!(errors.fields(), vec!["name", "amount", "endDate"]);

        let err = ClientError::from(errors);
        assert!(err.message().starts_with("name: 姓名不能为空"));
    }
}
