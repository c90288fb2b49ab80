//! Token table rendering.
//!
//! A [`TokenReport`] renders one lexed source in any [`OutputFormat`]. The
//! filter applies to the token rows and to the statistics; diagnostics are
//! always reported in full. [`write_many`] combines several reports into one
//! document.

use std::io::Write;

use chrono::{DateTime, Local};
use serde::Serialize;

use lumc_lex::{Lexed, Token, TokenFilter, TokenStats};
use lumc_util::Diagnostic;

use crate::commands::common::OutputFormat;
use crate::error::Result;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One lexed source ready to be written out.
pub struct TokenReport<'a> {
    source_name: &'a str,
    lexed: &'a Lexed,
    filter: TokenFilter,
    generated: DateTime<Local>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    source: &'a str,
    generated: String,
    filter: &'static str,
    tokens: Vec<JsonToken<'a>>,
    diagnostics: Vec<JsonDiagnostic<'a>>,
}

#[derive(Serialize)]
struct JsonToken<'a> {
    line: u32,
    kind: &'static str,
    lexeme: &'a str,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    line: u32,
    code: String,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<&'a str>,
}

impl<'a> TokenReport<'a> {
    pub fn new(source_name: &'a str, lexed: &'a Lexed, filter: TokenFilter) -> Self {
        Self {
            source_name,
            lexed,
            filter,
            generated: Local::now(),
        }
    }

    fn tokens(&self) -> impl Iterator<Item = &'a Token> {
        let lexed: &'a Lexed = self.lexed;
        self.filter.apply(&lexed.tokens)
    }

    fn stats(&self) -> TokenStats {
        TokenStats::from_tokens(self.tokens())
    }

    /// Write the report to `out` in `format`.
    pub fn write<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<()> {
        match format {
            OutputFormat::Table => self.write_table(out),
            OutputFormat::Text => self.write_text(out),
            OutputFormat::Csv => self.write_csv(out),
            OutputFormat::Json => self.write_json(out),
        }
    }

    fn write_table<W: Write>(&self, out: &mut W) -> Result<()> {
        for token in self.tokens() {
            writeln!(out, "{}", token)?;
        }
        Ok(())
    }

    fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Lumina Token Table")?;
        writeln!(out, "Source:    {}", self.source_name)?;
        writeln!(out, "Generated: {}", self.generated.format(TIMESTAMP_FORMAT))?;
        writeln!(out, "Filter:    {}", self.filter)?;
        writeln!(out)?;

        writeln!(out, "{:<6} | {:<18} | LEXEME", "LINE", "TYPE")?;
        writeln!(out, "{}+{}+{}", "-".repeat(7), "-".repeat(20), "-".repeat(20))?;
        for token in self.tokens() {
            writeln!(out, "{:<6} | {:<18} | {}", token.line, token.kind, token.text)?;
        }
        writeln!(out)?;

        let stats = self.stats();
        writeln!(out, "Token Statistics")?;
        writeln!(out, "Total tokens: {}", stats.total())?;
        for (kind, count) in stats.iter() {
            writeln!(out, "  {:<18} : {}", kind, count)?;
        }

        if !self.lexed.diagnostics.is_empty() {
            writeln!(out)?;
            writeln!(out, "Lexical Errors ({})", self.lexed.diagnostics.len())?;
            for diagnostic in &self.lexed.diagnostics {
                writeln!(out, "  {}", diagnostic)?;
            }
        }
        Ok(())
    }

    fn write_csv<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut writer = csv::WriterBuilder::new().from_writer(&mut *out);
        writer.write_record(["Line", "Type", "Lexeme"])?;
        for token in self.tokens() {
            let line = token.line.to_string();
            writer.write_record([line.as_str(), token.kind.as_str(), token.text.as_str()])?;
        }
        let out = writer.into_inner().map_err(|e| e.into_error())?;

        let stats = self.stats();
        writeln!(out, "# Generated: {}", self.generated.format(TIMESTAMP_FORMAT))?;
        writeln!(out, "# Total tokens: {}", stats.total())?;
        for (kind, count) in stats.iter() {
            writeln!(out, "# {}: {}", kind, count)?;
        }
        Ok(())
    }

    fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, &self.json())?;
        writeln!(out)?;
        Ok(())
    }

    fn json(&self) -> JsonReport<'a> {
        JsonReport {
            source: self.source_name,
            generated: self.generated.to_rfc3339(),
            filter: self.filter.as_str(),
            tokens: self
                .tokens()
                .map(|token| JsonToken {
                    line: token.line,
                    kind: token.kind.as_str(),
                    lexeme: &token.text,
                })
                .collect(),
            diagnostics: self.lexed.diagnostics.iter().map(json_diagnostic).collect(),
        }
    }
}

/// Write several reports to `out` as a single document.
///
/// Table and text reports are each preceded by a `==> source <==` header.
/// CSV rows share one header row and gain a leading `Source` column; the
/// per-source footers are left out. JSON reports are written as one array.
pub fn write_many<W: Write>(
    reports: &[TokenReport<'_>],
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Table | OutputFormat::Text => {
            for report in reports {
                writeln!(out, "==> {} <==", report.source_name)?;
                report.write(format, out)?;
            }
        }
        OutputFormat::Csv => {
            let mut writer = csv::WriterBuilder::new().from_writer(&mut *out);
            writer.write_record(["Source", "Line", "Type", "Lexeme"])?;
            for report in reports {
                for token in report.tokens() {
                    let line = token.line.to_string();
                    writer.write_record([
                        report.source_name,
                        line.as_str(),
                        token.kind.as_str(),
                        token.text.as_str(),
                    ])?;
                }
            }
            writer.flush()?;
        }
        OutputFormat::Json => {
            let documents: Vec<_> = reports.iter().map(TokenReport::json).collect();
            serde_json::to_writer_pretty(&mut *out, &documents)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn json_diagnostic(diagnostic: &Diagnostic) -> JsonDiagnostic<'_> {
    JsonDiagnostic {
        line: diagnostic.line,
        code: diagnostic.code.as_str(),
        message: &diagnostic.message,
        suggestion: diagnostic.suggestion.as_deref(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumc_lex::tokenize;

    fn render(source: &str, filter: TokenFilter, format: OutputFormat) -> String {
        let lexed = tokenize(source);
        let report = TokenReport::new("main.lum", &lexed, filter);
        let mut out = Vec::new();
        report.write(format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_table() {
        let out = render("int x;", TokenFilter::All, OutputFormat::Table);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Line 1   | Keyword            | int");
        assert_eq!(lines[3], "Line 1   | EndOfInput         | ");
    }

    #[test]
    fn test_text_report() {
        let out = render("int x;\nint Y;", TokenFilter::All, OutputFormat::Text);
        assert!(out.starts_with("Lumina Token Table\nSource:    main.lum\n"));
        assert!(out.contains("1      | Keyword            | int"));
        assert!(out.contains("Token Statistics\nTotal tokens: 7\n"));
        assert!(out.contains("  Keyword            : 2"));
        assert!(out.contains("Lexical Errors (1)"));
        assert!(out.contains("Lexical Error (Line 2):"));
    }

    #[test]
    fn test_csv_report() {
        let out = render("display \"a, b\";", TokenFilter::All, OutputFormat::Csv);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Line,Type,Lexeme");
        assert_eq!(lines[1], "1,Keyword,display");
        assert_eq!(lines[2], "1,StringLiteral,\"\"\"a, b\"\"\"");
        assert!(lines.iter().any(|l| l.starts_with("# Generated: ")));
        assert!(lines.contains(&"# Total tokens: 4"));
        assert!(lines.contains(&"# Symbol: 1"));
    }

    #[test]
    fn test_json_report() {
        let out = render("int X;", TokenFilter::Errors, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["source"], "main.lum");
        assert_eq!(value["filter"], "errors");
        assert_eq!(value["tokens"].as_array().map(Vec::len), Some(1));
        assert_eq!(value["tokens"][0]["kind"], "Invalid");
        assert_eq!(value["tokens"][0]["lexeme"], "X");
        assert_eq!(value["diagnostics"][0]["line"], 1);
        assert_eq!(value["diagnostics"][0]["code"], "L0503");
    }

    #[test]
    fn test_many_csv_is_one_table() {
        let first = tokenize("int x;");
        let second = tokenize("char c;");
        let reports = [
            TokenReport::new("a.lum", &first, TokenFilter::Keywords),
            TokenReport::new("b.lum", &second, TokenFilter::Keywords),
        ];
        let mut out = Vec::new();
        write_many(&reports, OutputFormat::Csv, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "Source,Line,Type,Lexeme\na.lum,1,Keyword,int\nb.lum,1,Keyword,char\n"
        );
    }

    #[test]
    fn test_many_json_is_one_array() {
        let first = tokenize("int x;");
        let second = tokenize("int X;");
        let reports = [
            TokenReport::new("a.lum", &first, TokenFilter::All),
            TokenReport::new("b.lum", &second, TokenFilter::All),
        ];
        let mut out = Vec::new();
        write_many(&reports, OutputFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let documents = value.as_array().unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0]["source"], "a.lum");
        assert_eq!(documents[1]["diagnostics"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_many_tables_have_headers() {
        let first = tokenize("int x;");
        let second = tokenize("x;");
        let reports = [
            TokenReport::new("a.lum", &first, TokenFilter::All),
            TokenReport::new("b.lum", &second, TokenFilter::All),
        ];
        let mut out = Vec::new();
        write_many(&reports, OutputFormat::Table, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let headers: Vec<_> = out.lines().filter(|l| l.starts_with("==>")).collect();
        assert_eq!(headers, ["==> a.lum <==", "==> b.lum <=="]);
    }

    #[test]
    fn test_filter_limits_rows_and_stats() {
        let out = render("int x = 1;", TokenFilter::Keywords, OutputFormat::Text);
        assert!(out.contains("Total tokens: 1\n"));
        assert!(!out.contains("IntegerLiteral"));
    }
}
