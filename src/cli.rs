use std::io;
use std::path::Path;

use clap::Parser;

use crate::convert::{ConversionRequest, Converter};
use crate::interactive::process_interactive_mode;
use crate::utils::{create_spinner, default_output_path, setup_logging};

#[derive(Parser)]
#[command(
    name = "md2pdf",
    about = "將 Markdown 檔案轉換為 PDF（pandoc 版）",
    long_about = "一個將 Markdown 檔案轉換為 PDF 的工具，透過外部 pandoc 引擎完成轉換，支援自訂 LaTeX 模板。\n使用 `--help` 查看詳細用法。",
    arg_required_else_help = true
)]
pub struct Cli {
    pub input: String,
    #[arg(short, long)]
    pub output: Option<String>,
    #[arg(short, long)]
    pub template: Option<String>,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value = "info", value_parser = ["info", "warn", "error"])]
    pub log_level: String,
}

pub fn process_args(args: Vec<String>) -> io::Result<String> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> io::Result<String> {
    let cli = Cli::parse();
    validate_cli_args(&cli)?;
    setup_logging(&cli.log_level)?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));
    let request = ConversionRequest {
        source_path: cli.input.clone(),
        destination_path: output,
        template_path: cli.template.clone(),
    };

    log::info!(
        "開始轉換，輸入檔案：{}，輸出路徑：{}，模板：{:?}",
        request.source_path,
        request.destination_path,
        request.template_path
    );
    run_conversion(request, cli.no_progress)
}

pub fn run_conversion(request: ConversionRequest, no_progress: bool) -> io::Result<String> {
    let converter = Converter::with_default_engine(Box::new(|line: &str| {
        log::info!("{}", line);
    }));

    let spinner = create_spinner(no_progress);
    let result = converter.convert(&request);
    spinner.finish_and_clear();
    let result = result?;

    if result.success {
        Ok(request.destination_path)
    } else {
        Err(io::Error::new(
            io::ErrorKind::Other,
            format!("轉換失敗: {}", result.message),
        ))
    }
}

pub fn validate_cli_args(cli: &Cli) -> io::Result<()> {
    validate_input_path(&cli.input)?;
    Ok(())
}

pub fn validate_input_path(input: &str) -> io::Result<&Path> {
    let path = Path::new(input);
    if !path.exists() {
        log::error!("輸入檔案不存在：{}", input);
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("輸入檔案 '{}' 不存在", input),
        ));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parse_defaults() {
        let cli = Cli::parse_from(["md2pdf", "doc.md"]);
        assert_eq!(cli.input, "doc.md");
        assert!(cli.output.is_none());
        assert!(cli.template.is_none());
        assert!(!cli.no_progress);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn parse_output_and_template() {
        let cli = Cli::parse_from([
            "md2pdf",
            "doc.md",
            "-o",
            "out.pdf",
            "-t",
            "layout.tex",
            "--no-progress",
        ]);
        assert_eq!(cli.output.as_deref(), Some("out.pdf"));
        assert_eq!(cli.template.as_deref(), Some("layout.tex"));
        assert!(cli.no_progress);
    }

    #[test]
    fn run_conversion_clears_spinner_on_validation_error() {
        let request = ConversionRequest {
            source_path: String::new(),
            destination_path: "doc.pdf".to_string(),
            template_path: None,
        };
        let err = run_conversion(request, false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn validate_rejects_missing_input() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.md");
        let err = validate_input_path(missing.to_string_lossy().as_ref()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn validate_accepts_existing_input() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("doc.md");
        fs::write(&file, "# hi\n").unwrap();
        assert!(validate_input_path(file.to_string_lossy().as_ref()).is_ok());
    }
}
