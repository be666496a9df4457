//! 表格导出
//!
//! 默认导出当前已加载的行和可见列，生成单个工作表的 xlsx。
//! 需要后端全量导出时通过 [`ExportHook`] 接管。

use async_trait::async_trait;
use rust_xlsxwriter::{Format, Workbook};
use tracing::debug;

use super::column::{CellValue, Column};
use super::query::TableQuery;
use crate::errors::{ClientError, Result};
use crate::http::Blob;
use crate::http::blob::{CSV_CONTENT_TYPE, XLSX_CONTENT_TYPE};
use crate::services::crud::{CrudService, ResourceSpec};

// 列宽下限和上限（字符）
const MIN_COLUMN_WIDTH: f64 = 8.0;
const MAX_COLUMN_WIDTH: f64 = 60.0;

/// 自定义导出
#[async_trait]
pub trait ExportHook: Send + Sync {
    async fn export(&self, query: &TableQuery) -> Result<Blob>;
}

/// 调用后端导出接口，带上表格当前的搜索和筛选条件，不分页
#[async_trait]
impl<S: ResourceSpec> ExportHook for CrudService<S> {
    async fn export(&self, query: &TableQuery) -> Result<Blob> {
        CrudService::export(self, &query.without_paging()).await
    }
}

/// 表头文字对应的列宽，中日韩字符按两个宽度计算
pub fn header_width(title: &str) -> f64 {
    let units: usize = title
        .chars()
        .map(|c| if c.is_ascii() { 1 } else { 2 })
        .sum();
    (units as f64 + 4.0).clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH)
}

/// 生成 xlsx：第一行为加粗表头，其余为数据行
pub fn write_xlsx<R>(
    rows: &[R],
    columns: &[Column<R>],
    sheet_name: &str,
    file_name: &str,
) -> Result<Blob> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    if !sheet_name.is_empty() {
        worksheet.set_name(sheet_name)?;
    }

    // 表头格式
    let header_format = Format::new().set_bold();

    for (col, column) in columns.iter().enumerate() {
        let col = u16::try_from(col)
            .map_err(|_| ClientError::export("Too many columns for a worksheet"))?;
        worksheet.write_string_with_format(0, col, &column.title, &header_format)?;
        worksheet.set_column_width(col, header_width(&column.title))?;
    }

    for (index, row) in rows.iter().enumerate() {
        let row_num = u32::try_from(index + 1)
            .map_err(|_| ClientError::export("Too many rows for a worksheet"))?;
        for (col, column) in columns.iter().enumerate() {
            let col = col as u16;
            match column.cell(row) {
                CellValue::Text(text) => {
                    worksheet.write_string(row_num, col, text)?;
                }
                CellValue::Number(n) => {
                    worksheet.write_number(row_num, col, n)?;
                }
                CellValue::Empty => {}
            }
        }
    }

    let buffer = workbook.save_to_buffer()?;
    debug!("Exported {} rows x {} columns to xlsx", rows.len(), columns.len());
    Ok(Blob::new(buffer, file_name, XLSX_CONTENT_TYPE))
}

/// 生成 CSV（UTF-8，带 BOM 以便 Excel 正确识别中文）
pub fn write_csv<R>(rows: &[R], columns: &[Column<R>], file_name: &str) -> Result<Blob> {
    let mut wtr = csv::Writer::from_writer(vec![0xEF, 0xBB, 0xBF]);

    wtr.write_record(columns.iter().map(|c| c.title.as_str()))?;
    for row in rows {
        wtr.write_record(columns.iter().map(|c| c.cell(row).to_string()))?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| ClientError::export(format!("CSV 生成失败: {e}")))?;
    Ok(Blob::new(data, file_name, CSV_CONTENT_TYPE))
}

/// 带时间戳的导出文件名
pub fn export_file_name(base: &str, ext: &str) -> String {
    format!(
        "{}_{}.{}",
        base,
        chrono::Local::now().format("%Y%m%d%H%M%S"),
        ext
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        hours: f64,
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new("name", "姓名", |r: &Row| r.name),
            Column::new("hours", "剩余课时", |r: &Row| r.hours),
        ]
    }

    #[test]
    fn test_header_width() {
        assert_eq!(header_width("ID"), MIN_COLUMN_WIDTH);
        assert_eq!(header_width("剩余课时"), 12.0);
        assert_eq!(header_width(&"x".repeat(200)), MAX_COLUMN_WIDTH);
    }

    #[test]
    fn test_write_xlsx_produces_zip() {
        let rows = vec![Row { name: "张三", hours: 12.5 }];
        let blob = write_xlsx(&rows, &columns(), "学员", "学员.xlsx").expect("xlsx");
        assert_eq!(blob.content_type, XLSX_CONTENT_TYPE);
        // xlsx 本质是 zip
        assert_eq!(&blob.bytes[..2], b"PK");
    }

    #[test]
    fn test_write_csv() {
        let rows = vec![
            Row { name: "张三", hours: 12.0 },
            Row { name: "李四", hours: 0.5 },
        ];
        let blob = write_csv(&rows, &columns(), "学员.csv").expect("csv");
        let text = String::from_utf8(blob.bytes[3..].to_vec()).expect("utf8");
        assert_eq!(text, "姓名,剩余课时\n张三,12\n李四,0.5\n");
    }
}
