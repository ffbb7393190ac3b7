use std::io;
use std::path::Path;

use crate::engine::{ConversionEngine, PandocEngine};

pub struct ConversionRequest {
    pub source_path: String,
    pub destination_path: String,
    pub template_path: Option<String>,
}

#[derive(Debug)]
pub struct ConversionResult {
    pub success: bool,
    pub message: String,
}

pub type ProgressObserver = Box<dyn Fn(&str)>;

pub struct Converter {
    engine: Box<dyn ConversionEngine>,
    observer: ProgressObserver,
}

impl Converter {
    pub fn new(engine: Box<dyn ConversionEngine>, observer: ProgressObserver) -> Self {
        Converter { engine, observer }
    }

    pub fn with_default_engine(observer: ProgressObserver) -> Self {
        Converter::new(Box::new(PandocEngine::new()), observer)
    }

    pub fn convert(&self, request: &ConversionRequest) -> io::Result<ConversionResult> {
        validate_request(request)?;

        self.emit("開始轉換...");
        self.emit(&format!("讀取檔案：{}", request.source_path));

        let source = Path::new(&request.source_path);
        if !source.exists() {
            let message = format!("輸入檔案 '{}' 不存在", request.source_path);
            log::error!("{}", message);
            self.emit(&format!("錯誤：{}", message));
            return Ok(ConversionResult {
                success: false,
                message,
            });
        }

        let mut extra_args = Vec::new();
        if let Some(ref template) = request.template_path {
            self.emit(&format!("使用模板檔案：{}", template));
            extra_args.push("--template".to_string());
            extra_args.push(template.clone());
        }

        self.emit("Markdown 轉換為 PDF...");
        let destination = Path::new(&request.destination_path);
        match self.engine.convert(source, "pdf", destination, &extra_args) {
            Ok(()) => {
                let message = format!("轉換完成！PDF 已儲存至：{}", request.destination_path);
                self.emit(&message);
                Ok(ConversionResult {
                    success: true,
                    message,
                })
            }
            Err(e) => {
                let message = e.to_string();
                log::error!("轉換失敗：{}", message);
                self.emit(&format!("錯誤：{}", message));
                Ok(ConversionResult {
                    success: false,
                    message,
                })
            }
        }
    }

    fn emit(&self, line: &str) {
        (self.observer)(line);
    }
}

pub fn validate_request(request: &ConversionRequest) -> io::Result<()> {
    if request.source_path.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "請選擇 Markdown 輸入檔案",
        ));
    }
    if request.destination_path.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "請指定 PDF 輸出路徑",
        ));
    }
    Ok(())
}
