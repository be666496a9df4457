use clap::ValueEnum;
use serde_json::Value;

use crate::table::Column;

/// 命令行可操作的资源
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Resource {
    Students,
    Teachers,
    Classes,
    Classrooms,
    Schedules,
    Holidays,
    CoursePackages,
    Contracts,
    Payments,
    Refunds,
    ClassHours,
    Leads,
    Messages,
    Roles,
    Users,
    SystemConfig,
    OperationLogs,
    LoginLogs,
    Campuses,
}

impl Resource {
    pub fn path(self) -> &'static str {
        match self {
            Resource::Students => "/students",
            Resource::Teachers => "/teachers",
            Resource::Classes => "/classes",
            Resource::Classrooms => "/classrooms",
            Resource::Schedules => "/schedules",
            Resource::Holidays => "/holidays",
            Resource::CoursePackages => "/course-packages",
            Resource::Contracts => "/contracts",
            Resource::Payments => "/payments",
            Resource::Refunds => "/refunds",
            Resource::ClassHours => "/class-hours",
            Resource::Leads => "/leads",
            Resource::Messages => "/messages",
            Resource::Roles => "/roles",
            Resource::Users => "/users",
            Resource::SystemConfig => "/system/config",
            Resource::OperationLogs => "/logs/operation",
            Resource::LoginLogs => "/logs/login",
            Resource::Campuses => "/campuses",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Resource::Students => "学员",
            Resource::Teachers => "教师",
            Resource::Classes => "班级",
            Resource::Classrooms => "教室",
            Resource::Schedules => "课表",
            Resource::Holidays => "节假日",
            Resource::CoursePackages => "课程套餐",
            Resource::Contracts => "合同",
            Resource::Payments => "收款记录",
            Resource::Refunds => "退费记录",
            Resource::ClassHours => "课时账户",
            Resource::Leads => "线索",
            Resource::Messages => "消息",
            Resource::Roles => "角色",
            Resource::Users => "用户",
            Resource::SystemConfig => "系统参数",
            Resource::OperationLogs => "操作日志",
            Resource::LoginLogs => "登录日志",
            Resource::Campuses => "校区",
        }
    }

    // 默认列：字段名与表头
    fn default_columns(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Resource::Students => &[
                ("id", "ID"),
                ("name", "姓名"),
                ("phone", "联系电话"),
                ("parentName", "家长"),
                ("status", "状态"),
            ],
            Resource::Teachers => &[
                ("id", "ID"),
                ("name", "姓名"),
                ("phone", "联系电话"),
                ("status", "状态"),
            ],
            Resource::Classes => &[
                ("id", "ID"),
                ("name", "班级名称"),
                ("teacher.name", "任课教师"),
                ("studentCount", "人数"),
                ("capacity", "容量"),
                ("status", "状态"),
            ],
            Resource::Classrooms => &[
                ("id", "ID"),
                ("name", "教室"),
                ("capacity", "容量"),
                ("status", "状态"),
            ],
            Resource::Schedules => &[
                ("id", "ID"),
                ("className", "班级"),
                ("date", "日期"),
                ("startTime", "开始"),
                ("endTime", "结束"),
                ("teacherName", "教师"),
                ("status", "状态"),
            ],
            Resource::Holidays => &[
                ("id", "ID"),
                ("name", "名称"),
                ("startDate", "开始日期"),
                ("endDate", "结束日期"),
                ("type", "类型"),
            ],
            Resource::CoursePackages => &[
                ("id", "ID"),
                ("name", "套餐名称"),
                ("totalHours", "课时"),
                ("price", "价格"),
                ("status", "状态"),
            ],
            Resource::Contracts => &[
                ("id", "ID"),
                ("contractNo", "合同编号"),
                ("studentName", "学员"),
                ("amount", "金额"),
                ("paidAmount", "已收"),
                ("status", "状态"),
            ],
            Resource::Payments => &[
                ("id", "ID"),
                ("paymentNo", "收款单号"),
                ("studentName", "学员"),
                ("amount", "金额"),
                ("method", "方式"),
                ("status", "状态"),
            ],
            Resource::Refunds => &[
                ("id", "ID"),
                ("contractId", "合同"),
                ("amount", "退费金额"),
                ("reason", "原因"),
                ("status", "状态"),
            ],
            Resource::ClassHours => &[
                ("id", "ID"),
                ("studentName", "学员"),
                ("courseName", "课程"),
                ("totalHours", "总课时"),
                ("remainingHours", "剩余课时"),
            ],
            Resource::Leads => &[
                ("id", "ID"),
                ("name", "姓名"),
                ("phone", "联系电话"),
                ("source", "来源"),
                ("assignee.name", "负责顾问"),
                ("status", "状态"),
            ],
            Resource::Messages => &[
                ("id", "ID"),
                ("title", "标题"),
                ("type", "类型"),
                ("isRead", "已读"),
                ("createTime", "时间"),
            ],
            Resource::Roles => &[
                ("id", "ID"),
                ("name", "角色"),
                ("code", "编码"),
                ("status", "状态"),
            ],
            Resource::Users => &[
                ("id", "ID"),
                ("username", "用户名"),
                ("nickname", "昵称"),
                ("phone", "联系电话"),
                ("status", "状态"),
            ],
            Resource::SystemConfig => &[
                ("id", "ID"),
                ("configKey", "参数键"),
                ("configValue", "参数值"),
                ("configName", "名称"),
            ],
            Resource::OperationLogs => &[
                ("id", "ID"),
                ("module", "模块"),
                ("action", "操作"),
                ("operatorName", "操作人"),
                ("createTime", "时间"),
            ],
            Resource::LoginLogs => &[
                ("id", "ID"),
                ("username", "用户名"),
                ("ip", "IP"),
                ("success", "成功"),
                ("loginTime", "时间"),
            ],
            Resource::Campuses => &[
                ("id", "ID"),
                ("name", "校区"),
                ("address", "地址"),
                ("status", "状态"),
            ],
        }
    }

    /// 表格列；`keys` 非空时只保留并按其顺序排列
    pub fn columns(self, keys: &[String]) -> Vec<Column<Value>> {
        let defaults = self.default_columns();
        if keys.is_empty() {
            return defaults
                .iter()
                .map(|(key, title)| Column::json(*key, *title))
                .collect();
        }
        keys.iter()
            .map(|key| {
                let title = defaults
                    .iter()
                    .find(|(k, _)| *k == key.as_str())
                    .map(|(_, title)| *title)
                    .unwrap_or(key.as_str());
                Column::json(key.as_str(), title)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_follow_requested_keys() {
        let columns = Resource::Students.columns(&["phone".to_string(), "grade".to_string()]);
        let titles: Vec<&str> = columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["联系电话", "grade"]);
        assert_eq!(Resource::Leads.columns(&[]).len(), 6);
    }
}
