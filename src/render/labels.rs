//! Output labels in English and Russian.

use std::str::FromStr;

/// Language of report labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Russian,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "ru" | "russian" => Ok(Language::Russian),
            other => Err(format!("unknown language: {}", other)),
        }
    }
}

impl Language {
    pub(crate) fn analyzing(self, source: &str) -> String {
        match self {
            Language::English => format!("Analyzing {}...", source),
            Language::Russian => format!("Анализ {}...", source),
        }
    }

    pub(crate) fn detailed_title(self, source: &str) -> String {
        match self {
            Language::English => format!("=== DETAILED ANALYSIS {} ===", source),
            Language::Russian => format!("=== ДЕТАЛЬНЫЙ АНАЛИЗ {} ===", source),
        }
    }

    pub(crate) fn files_in_archive(self) -> &'static str {
        match self {
            Language::English => "Files in XLSX:",
            Language::Russian => "Файлы в XLSX:",
        }
    }

    pub(crate) fn shared_strings_heading(self, total: usize) -> String {
        match self {
            Language::English => format!("Shared strings ({}):", total),
            Language::Russian => format!("Общие строки ({}):", total),
        }
    }

    pub(crate) fn shared_strings_error(self, error: &str) -> String {
        match self {
            Language::English => format!("Error reading shared strings: {}", error),
            Language::Russian => format!("Ошибка чтения shared strings: {}", error),
        }
    }

    pub(crate) fn shared_string_total(self, total: usize) -> String {
        match self {
            Language::English => format!("Total shared strings: {}", total),
            Language::Russian => format!("Всего строк в shared strings: {}", total),
        }
    }

    pub(crate) fn first_strings(self, count: usize) -> String {
        match self {
            Language::English => format!("First {} strings:", count),
            Language::Russian => format!("Первые {} строк:", count),
        }
    }

    pub(crate) fn sheet_data(self, sheet: &str) -> String {
        match self {
            Language::English => format!("Sheet data ({}):", sheet),
            Language::Russian => format!("Данные листа ({}):", sheet),
        }
    }

    pub(crate) fn total_rows(self, total: usize) -> String {
        match self {
            Language::English => format!("Total rows: {}", total),
            Language::Russian => format!("Всего строк в листе: {}", total),
        }
    }

    pub(crate) fn data_row_heading(self, position: usize) -> String {
        match self {
            Language::English => format!("Row {} (has data):", position),
            Language::Russian => format!("Строка {} (есть данные):", position),
        }
    }

    pub(crate) fn cell_value(self, column: usize) -> String {
        match self {
            Language::English => format!("Cell {}", column),
            Language::Russian => format!("Ячейка {}", column),
        }
    }

    pub(crate) fn no_data_rows(self) -> &'static str {
        match self {
            Language::English => "No data rows found!",
            Language::Russian => "Строки с данными не найдены!",
        }
    }

    pub(crate) fn sheet_error(self, error: &str) -> String {
        match self {
            Language::English => format!("Error reading sheet data: {}", error),
            Language::Russian => format!("Ошибка чтения данных листа: {}", error),
        }
    }

    pub(crate) fn first_rows_title(self, count: usize) -> String {
        match self {
            Language::English => format!("=== FIRST {} ROWS ===", count),
            Language::Russian => format!("=== АНАЛИЗ ПЕРВЫХ {} СТРОК ===", count),
        }
    }

    pub(crate) fn row_heading(self, position: usize) -> String {
        match self {
            Language::English => format!("Row {}:", position),
            Language::Russian => format!("Строка {}:", position),
        }
    }

    pub(crate) fn cell_count(self, count: usize) -> String {
        match self {
            Language::English => format!("Cell count: {}", count),
            Language::Russian => format!("Количество ячеек: {}", count),
        }
    }

    pub(crate) fn cell_detail(self, reference: &str) -> String {
        match self {
            Language::English => format!("Cell {}", reference),
            Language::Russian => format!("Ячейка {}", reference),
        }
    }

    pub(crate) fn data_search_title(self) -> &'static str {
        match self {
            Language::English => "=== DATA SEARCH ===",
            Language::Russian => "=== ПОИСК ДАННЫХ ===",
        }
    }

    pub(crate) fn sample_heading(self, ordinal: usize, position: usize) -> String {
        match self {
            Language::English => format!("Data row {} (row {}):", ordinal, position),
            Language::Russian => format!("Строка с данными {} (строка {}):", ordinal, position),
        }
    }

    pub(crate) fn column_value(self, column: usize) -> String {
        match self {
            Language::English => format!("Column {}", column),
            Language::Russian => format!("Колонка {}", column),
        }
    }

    pub(crate) fn data_row_total(self, total: usize) -> String {
        match self {
            Language::English => format!("Total data rows: {}", total),
            Language::Russian => format!("Всего строк с данными: {}", total),
        }
    }
}
