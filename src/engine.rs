use std::io;
use std::path::Path;
use std::process::Command;

pub trait ConversionEngine {
    fn convert(
        &self,
        source: &Path,
        to: &str,
        output: &Path,
        extra_args: &[String],
    ) -> io::Result<()>;
}

pub struct PandocEngine {
    program: String,
}

impl PandocEngine {
    pub fn new() -> Self {
        PandocEngine {
            program: "pandoc".to_string(),
        }
    }

    pub fn with_program(program: &str) -> Self {
        PandocEngine {
            program: program.to_string(),
        }
    }

    pub fn build_args(source: &Path, to: &str, output: &Path, extra_args: &[String]) -> Vec<String> {
        let mut args = vec![source.to_string_lossy().to_string()];
        // pandoc 不接受 -t pdf，PDF 寫入器由輸出副檔名決定
        if to != "pdf" {
            args.push("-t".to_string());
            args.push(to.to_string());
        }
        args.push("-o".to_string());
        args.push(output.to_string_lossy().to_string());
        args.extend(extra_args.iter().cloned());
        args
    }
}

impl Default for PandocEngine {
    fn default() -> Self {
        PandocEngine::new()
    }
}

impl ConversionEngine for PandocEngine {
    fn convert(
        &self,
        source: &Path,
        to: &str,
        output: &Path,
        extra_args: &[String],
    ) -> io::Result<()> {
        let args = PandocEngine::build_args(source, to, output, extra_args);
        log::info!("執行 {}，參數：{:?}", self.program, args);

        let result = Command::new(&self.program).args(&args).output();
        let command_output = result.map_err(|e| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("無法執行 {}，請確認已安裝 pandoc：{}", self.program, e),
            )
        })?;

        if command_output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&command_output.stderr);
            Err(io::Error::new(io::ErrorKind::Other, stderr.trim().to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn build_args_omits_target_format_for_pdf() {
        let args = PandocEngine::build_args(
            Path::new("doc.md"),
            "pdf",
            Path::new("doc.pdf"),
            &[],
        );
        assert_eq!(args, vec!["doc.md", "-o", "doc.pdf"]);
    }

    #[test]
    fn build_args_keeps_explicit_target_format() {
        let args = PandocEngine::build_args(
            Path::new("doc.md"),
            "latex",
            Path::new("doc.tex"),
            &[],
        );
        assert_eq!(args, vec!["doc.md", "-t", "latex", "-o", "doc.tex"]);
    }

    #[test]
    fn build_args_appends_template_directive() {
        let extra = vec!["--template".to_string(), "layout.tex".to_string()];
        let args = PandocEngine::build_args(
            Path::new("doc.md"),
            "pdf",
            Path::new("doc.pdf"),
            &extra,
        );
        assert_eq!(args, vec!["doc.md", "-o", "doc.pdf", "--template", "layout.tex"]);
    }

    #[test]
    fn missing_binary_reports_error() {
        let engine = PandocEngine::with_program("md2pdf-no-such-binary");
        let err = engine
            .convert(Path::new("doc.md"), "pdf", Path::new("doc.pdf"), &[])
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("無法執行"));
    }
}
