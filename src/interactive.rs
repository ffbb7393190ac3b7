use std::io;
use std::path::Path;

use dialoguer::Input;

use crate::cli::run_conversion;
use crate::convert::ConversionRequest;
use crate::utils::{default_output_path, setup_logging};

pub fn process_interactive_mode() -> io::Result<String> {
    println!("=== 歡迎使用互動模式 ===");
    let input = get_input_path()?;
    let output = get_output_path(&input)?;
    let template = get_template_path()?;
    let no_progress = get_no_progress_option()?;
    let log_level = get_log_level_option()?;

    setup_logging(&log_level)?;
    let request = ConversionRequest {
        source_path: input,
        destination_path: output,
        template_path: template,
    };
    run_conversion(request, no_progress)
}

pub fn get_input_path() -> io::Result<String> {
    Input::new()
        .with_prompt("請輸入 Markdown 檔案路徑（例如：./doc.md）")
        .validate_with(|input: &String| -> Result<(), String> {
            if Path::new(input).exists() {
                Ok(())
            } else {
                Err(format!("檔案 '{}' 不存在", input))
            }
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_output_path(input: &str) -> io::Result<String> {
    Input::new()
        .with_prompt("輸入 PDF 輸出路徑（預設依輸入檔案命名）")
        .default(default_output_path(input))
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_template_path() -> io::Result<Option<String>> {
    let template: String = Input::new()
        .with_prompt("輸入模板檔案路徑（例如：./layout.tex，可留空）")
        .allow_empty(true)
        .default("".to_string())
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("模板路徑輸入失敗: {}", e)))?;
    Ok(if template.is_empty() {
        None
    } else {
        Some(template)
    })
}

pub fn get_no_progress_option() -> io::Result<bool> {
    Ok(false)
}

pub fn get_log_level_option() -> io::Result<String> {
    Ok("info".to_string())
}
