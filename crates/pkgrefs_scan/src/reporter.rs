use std::io::{self, Write};

use colored::Colorize;
use log::debug;
use pkgrefs_core::PackageReference;

use crate::types::ScanResult;

pub fn print_no_packages_message<W: Write>(writer: &mut W) -> io::Result<()> {
    debug!("No packages referenced");
    writeln!(writer, "{} No external packages referenced.", "✓".green().bold())?;
    writer.flush()?;
    Ok(())
}

/// One package per line, type-only packages marked
pub fn print_package_list<W: Write>(
    writer: &mut W,
    packages: &[PackageReference],
) -> io::Result<()> {
    for package in packages {
        writeln!(writer, "{}", package_line(package))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn print_scan_report<W: Write>(
    writer: &mut W,
    result: &ScanResult,
    per_file: bool,
) -> io::Result<()> {
    debug!("Printing scan report for {} packages", result.packages.len());

    if per_file {
        for file in result.files.iter().filter(|f| !f.packages.is_empty()) {
            writeln!(writer, "{}", file.path.blue())?;
            for (idx, package) in file.packages.iter().enumerate() {
                let is_last = idx == file.packages.len() - 1;
                let prefix = if is_last { "└──" } else { "├──" };
                writeln!(writer, "{}  {}", prefix.dimmed(), package_line(package))?;
            }
            writeln!(writer)?;
        }
    } else if !result.packages.is_empty() {
        writeln!(
            writer,
            "{} {} packages referenced\n",
            "●".bright_blue(),
            result.packages.len().to_string().cyan()
        )?;
        print_package_list(writer, &result.packages)?;
        writeln!(writer)?;
    }

    print_summary(writer, result)?;

    writer.flush()?;
    Ok(())
}

fn print_summary<W: Write>(writer: &mut W, result: &ScanResult) -> io::Result<()> {
    writeln!(writer, "{}", "─".repeat(60).dimmed())?;
    writeln!(writer, "{}", "Summary".bold())?;
    writeln!(writer, "  Files scanned: {}", result.files_analyzed.to_string().cyan())?;
    writeln!(
        writer,
        "  Packages: {} ({} type-only)",
        result.packages.len().to_string().cyan().bold(),
        result.type_only_count().to_string().dimmed()
    )?;

    if !result.failures.is_empty() {
        writeln!(writer, "  Failures: {}", result.failures.len().to_string().red().bold())?;
        for failure in &result.failures {
            writeln!(writer, "    {} {}", failure.path.blue(), failure.error.red())?;
        }
    }

    Ok(())
}

fn package_line(package: &PackageReference) -> String {
    if package.is_type_only() {
        format!("{} {}", package.name, "(type-only)".dimmed())
    } else {
        package.name.bold().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FileReport, ScanFailure};
    use pkgrefs_core::ReferenceTag;

    fn render(result: &ScanResult, per_file: bool) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_scan_report(&mut out, result, per_file).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample() -> ScanResult {
        ScanResult {
            packages: vec![
                PackageReference::new("react", ReferenceTag::Normal),
                PackageReference::new("@types/node", ReferenceTag::TypeOnly),
            ],
            files: vec![
                FileReport {
                    path: "src/app.tsx".to_string(),
                    packages: vec![
                        PackageReference::new("react", ReferenceTag::Normal),
                        PackageReference::new("@types/node", ReferenceTag::TypeOnly),
                    ],
                },
                FileReport { path: "src/empty.ts".to_string(), packages: vec![] },
            ],
            failures: vec![ScanFailure {
                path: "src/bad.ts".to_string(),
                error: "Invalid package specifier: ''".to_string(),
            }],
            files_analyzed: 3,
        }
    }

    #[test]
    fn test_package_list() {
        let output = render(&sample(), false);
        assert!(output.contains("2 packages referenced"));
        assert!(output.contains("react\n"));
        assert!(output.contains("@types/node (type-only)\n"));
        assert!(output.contains("Files scanned: 3"));
        assert!(output.contains("Packages: 2 (1 type-only)"));
        assert!(output.contains("Failures: 1"));
        assert!(output.contains("src/bad.ts"));
    }

    #[test]
    fn test_per_file_tree() {
        let output = render(&sample(), true);
        assert!(output.contains("src/app.tsx\n├──  react\n└──  @types/node (type-only)\n"));
        assert!(!output.contains("src/empty.ts"));
    }
}
