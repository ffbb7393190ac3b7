use std::io;

use md2pdf::cli::process_args;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let output_path = process_args(args)?;
    log::info!("程式執行完成，輸出檔案：{}", output_path);
    println!("轉換完成！PDF 已儲存至：{}", output_path);
    Ok(())
}
