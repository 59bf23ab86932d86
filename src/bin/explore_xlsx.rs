//! Utility to dump the raw XML parts behind a workbook's cell values
use xlsxpeek::container::XlsxContainer;
use xlsxpeek::xlsx::XlsxInspector;

fn head(content: &str, limit: usize) -> String {
    content.chars().take(limit).collect()
}

fn main() -> Result<(), xlsxpeek::Error> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "TradeHistory.xlsx".to_string());
    let inspector = XlsxInspector::open(&path)?;
    let container: &XlsxContainer = inspector.container();

    println!("=== Files in archive ===");
    for file in container.list_files() {
        println!("  {}", file);
    }

    for (part, limit) in [
        ("[Content_Types].xml", 2000),
        ("xl/workbook.xml", 2000),
        ("xl/_rels/workbook.xml.rels", 2000),
        ("xl/sharedStrings.xml", 2000),
    ] {
        println!("\n=== {} (first {} chars) ===", part, limit);
        match container.read_xml(part) {
            Ok(content) => println!("{}", head(&content, limit)),
            Err(e) => println!("{}", e),
        }
    }

    let sheet = inspector.first_sheet();
    println!(
        "\n=== {} [{}] (first 3000 chars) ===",
        sheet.path,
        sheet.name.as_deref().unwrap_or("?")
    );
    match container.read_xml(&sheet.path) {
        Ok(content) => println!("{}", head(&content, 3000)),
        Err(e) => println!("{}", e),
    }

    Ok(())
}
