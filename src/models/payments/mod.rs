use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{PageQuery, define_status, impl_has_id};
use crate::utils::validate::{FieldErrors, Validate, require_positive};

define_status! {
    // 支付方式
    PaymentMethod {
        Cash => "cash": "现金",
        Wechat => "wechat": "微信",
        Alipay => "alipay": "支付宝",
        BankCard => "bank_card": "银行卡",
        Transfer => "transfer": "对公转账",
    }
}

define_status! {
    // 收款状态
    PaymentStatus {
        Pending => "pending": "待确认",
        Confirmed => "confirmed": "已确认",
        Cancelled => "cancelled": "已作废",
    }
}

// 收款记录
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    #[serde(default)]
    pub payment_no: String,
    pub contract_id: i64,
    #[serde(default)]
    pub student_id: Option<i64>,
    #[serde(default)]
    pub student_name: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub method: PaymentMethod,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub paid_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default, with = "crate::utils::datetime::option")]
    pub create_time: Option<NaiveDateTime>,
}

impl_has_id!(Payment);

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentListParams {
    #[serde(flatten)]
    pub pagination: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<PaymentMethod>,
}

// 登记收款
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentForm {
    pub contract_id: i64,
    pub amount: f64,
    pub method: PaymentMethod,
    #[serde(with = "crate::utils::datetime::option")]
    pub paid_time: Option<NaiveDateTime>,
    pub remark: Option<String>,
}

impl Validate for PaymentForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_positive(&mut errors, "amount", self.amount, "收款金额");
        if self.method == PaymentMethod::Unknown {
            errors.add("method", "请选择支付方式");
        }
        errors.into_result()
    }
}
