use super::ContractService;
use crate::errors::Result;
use crate::http::Blob;

impl ContractService {
    /// 下载合同打印件
    pub async fn print(&self, contract_id: i64) -> Result<Blob> {
        let fallback = format!("合同_{contract_id}.pdf");
        self.http()
            .download(&self.sub(format!("{contract_id}/print")), &(), &fallback)
            .await
    }
}
