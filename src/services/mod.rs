//! 接口服务层
//!
//! 每个业务域一个服务，通用增删改查由 [`crud::CrudService`] 提供，
//! 业务域特有的接口以 inherent impl 的方式补充在对应模块中。

pub mod auth;
pub mod campuses;
pub mod class_hours;
pub mod classes;
pub mod classrooms;
pub mod contracts;
pub mod course_packages;
pub mod crud;
pub mod holidays;
pub mod leads;
pub mod logs;
pub mod messages;
pub mod payments;
pub mod refunds;
pub mod roles;
pub mod schedules;
pub mod students;
pub mod system;
pub mod teachers;
pub mod users;

pub use auth::AuthService;
pub use campuses::CampusService;
pub use class_hours::ClassHourService;
pub use classes::ClassService;
pub use classrooms::ClassroomService;
pub use contracts::ContractService;
pub use course_packages::CoursePackageService;
pub use crud::{CrudService, DynamicService, ResourceSpec};
pub use holidays::HolidayService;
pub use leads::LeadService;
pub use logs::{LoginLogService, OperationLogService};
pub use messages::MessageService;
pub use payments::PaymentService;
pub use refunds::RefundService;
pub use roles::RoleService;
pub use schedules::ScheduleService;
pub use students::StudentService;
pub use system::SystemConfigService;
pub use teachers::TeacherService;
pub use users::UserService;

use std::sync::Arc;
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::http::HttpClient;
use crate::notify::Notifier;
use crate::store::{FileTokenStorage, SessionStore, UiStore};

/// 控制台客户端
///
/// 持有共享的 HTTP 客户端、会话和界面状态，按需创建各业务服务。
#[derive(Debug, Clone)]
pub struct EduClient {
    http: Arc<HttpClient>,
    ui: Arc<UiStore>,
}

impl EduClient {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self {
            http,
            ui: Arc::new(UiStore::new()),
        }
    }

    /// 按配置创建，令牌从配置的文件恢复
    pub fn from_config(config: &AppConfig, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let token_path = config.token_file_path();
        debug!("Using token file {}", token_path.display());
        let session = Arc::new(SessionStore::restore(Box::new(FileTokenStorage::new(
            token_path,
        ))));
        let http = HttpClient::from_config(config, session, notifier)?;
        Ok(Self::new(Arc::new(http)))
    }

    pub fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        self.http.session()
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        self.http.notifier()
    }

    pub fn ui(&self) -> &Arc<UiStore> {
        &self.ui
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.http.clone())
    }

    pub fn students(&self) -> StudentService {
        StudentService::new(self.http.clone())
    }

    pub fn teachers(&self) -> TeacherService {
        TeacherService::new(self.http.clone())
    }

    pub fn classes(&self) -> ClassService {
        ClassService::new(self.http.clone())
    }

    pub fn classrooms(&self) -> ClassroomService {
        ClassroomService::new(self.http.clone())
    }

    pub fn schedules(&self) -> ScheduleService {
        ScheduleService::new(self.http.clone())
    }

    pub fn holidays(&self) -> HolidayService {
        HolidayService::new(self.http.clone())
    }

    pub fn course_packages(&self) -> CoursePackageService {
        CoursePackageService::new(self.http.clone())
    }

    pub fn contracts(&self) -> ContractService {
        ContractService::new(self.http.clone())
    }

    pub fn payments(&self) -> PaymentService {
        PaymentService::new(self.http.clone())
    }

    pub fn refunds(&self) -> RefundService {
        RefundService::new(self.http.clone())
    }

    pub fn class_hours(&self) -> ClassHourService {
        ClassHourService::new(self.http.clone())
    }

    pub fn leads(&self) -> LeadService {
        LeadService::new(self.http.clone())
    }

    pub fn messages(&self) -> MessageService {
        MessageService::new(self.http.clone())
    }

    pub fn roles(&self) -> RoleService {
        RoleService::new(self.http.clone())
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.http.clone())
    }

    pub fn system_config(&self) -> SystemConfigService {
        SystemConfigService::new(self.http.clone())
    }

    pub fn operation_logs(&self) -> OperationLogService {
        OperationLogService::new(self.http.clone())
    }

    pub fn login_logs(&self) -> LoginLogService {
        LoginLogService::new(self.http.clone())
    }

    pub fn campuses(&self) -> CampusService {
        CampusService::new(self.http.clone())
    }

    /// 任意路径的 JSON 资源
    pub fn resource(&self, path: &str) -> DynamicService {
        DynamicService::with_path(self.http.clone(), path)
    }
}
