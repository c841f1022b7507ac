use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const HEADER: &str = "/**
 * Internationalization content
 * Real, meaningful Arabic content for the GCC market
 */

export type Locale = 'en' | 'ar'
";

#[test]
fn test_split_without_subcommand() -> Result<()> {
    let test = CliTest::with_source()?;

    let output = test.command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let stdout = stdout(&output);
    assert!(stdout.starts_with("EN section: "));
    assert!(stdout.contains("\nAR section: "));
    assert!(stdout.contains("\nProcessing common...\n  \u{2713} Created lib/i18n/common.ts\n"));
    assert!(stdout.contains("\nProcessing gcc...\n\nProcessing examples...\n"));
    assert!(stdout.contains("\u{2713} Created lib/i18n/components/index.ts"));
    assert!(stdout.ends_with(
        "\u{2705} Split complete!\n\nNext steps:\n1. Create lib/i18n/index.ts with dynamic loader\n2. Update imports in app files\n3. Test the new system\n"
    ));

    Ok(())
}

#[test]
fn test_split_writes_grouping_files() -> Result<()> {
    let test = CliTest::with_source()?;

    let output = test.split_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    for created in [
        "lib/i18n/common.ts",
        "lib/i18n/home.ts",
        "lib/i18n/components/index.ts",
    ] {
        assert!(test.exists(created), "{} should exist", created);
    }
    for skipped in [
        "lib/i18n/themes.ts",
        "lib/i18n/documentation.ts",
        "lib/i18n/gcc.ts",
        "lib/i18n/examples.ts",
    ] {
        assert!(!test.exists(skipped), "{} should not exist", skipped);
    }

    Ok(())
}

#[test]
fn test_split_common_file_content() -> Result<()> {
    let test = CliTest::with_source()?;
    test.split_command().output()?;

    let content = test.read_file("lib/i18n/common.ts")?;

    let expected = format!(
        "{}\n\nexport const translations = {{\n  en: {{\n    nav: {{\n      home: 'Home',\n      themes: 'Themes',\n    }},\n  }},\n\n  ar: {{\n    nav: {{\n      home: 'الرئيسية',\n      themes: 'السمات',\n    }},\n  }},\n}}\n",
        HEADER
    );
    assert_eq!(content, expected);
    assert!(!content.contains("hero"));
    assert!(!content.contains("footer"));

    Ok(())
}

#[test]
fn test_split_handles_braces_inside_strings() -> Result<()> {
    let test = CliTest::with_source()?;
    test.split_command().output()?;

    let content = test.read_file("lib/i18n/home.ts")?;

    assert!(content.contains(
        "    home: {\n      hero: {\n        title: 'RTL-First Design System',\n        hint: 'Press } to close',\n      },\n    },\n  },"
    ));
    assert!(content.contains("        hint: 'اضغط } للإغلاق',\n      },\n    },\n  },\n}\n"));
    assert!(!content.contains("buttonComponent"));

    Ok(())
}

#[test]
fn test_split_raw_scan_mode_from_config() -> Result<()> {
    let test = CliTest::with_source()?;
    test.write_file(".i18nsplitrc.json", r#"{ "scanMode": "raw" }"#)?;

    let output = test.split_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    // The `}` inside the hint string is counted, so the entry ends at the
    // hero block's closing brace.
    let content = test.read_file("lib/i18n/home.ts")?;
    assert!(content.contains("        hint: 'Press } to close',\n      },\n  },\n\n  ar: {"));

    Ok(())
}

#[test]
fn test_split_custom_groupings() -> Result<()> {
    let test = CliTest::with_source()?;
    test.write_file(
        ".i18nsplitrc.json",
        r#"{
            "outputRoot": "src/messages",
            "exportName": "messages",
            "header": "// generated\n",
            "groupings": [
                { "name": "shell", "keys": ["nav", "footer"] },
                { "name": "ui", "output": "ui/buttons.ts", "keys": ["buttonComponent"] }
            ]
        }"#,
    )?;

    let output = test.command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let shell = test.read_file("src/messages/shell.ts")?;
    assert!(shell.starts_with("// generated\n\n\nexport const messages = {\n  en: {\n    nav: {"));
    // footer only exists in the primary locale
    assert!(shell.contains("    footer: {\n      copyright: 'All rights reserved',\n    },\n  },\n\n  ar: {"));
    assert!(test.exists("src/messages/ui/buttons.ts"));
    assert!(!test.exists("lib/i18n"));

    Ok(())
}

#[test]
fn test_split_verbose_reports_missing_keys() -> Result<()> {
    let test = CliTest::with_source()?;

    let output = test.split_command().arg("-v").output()?;
    assert!(output.status.success());

    let stdout = stdout(&output);
    assert!(stdout.contains("    Missing (en): ui, docs, common\n"));
    assert!(stdout.contains("    Missing (ar): ui, docs, common\n"));
    assert!(stdout.contains("Skipped: no keys found in en section"));
    assert!(stdout.contains(" lines, "));
    assert!(stderr(&output).contains("Note: No .i18nsplitrc.json found"));

    Ok(())
}

#[test]
fn test_split_source_and_output_root_flags() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("content/all.ts", crate::SOURCE)?;

    let output = test
        .split_command()
        .args(["--source", "content/all.ts", "--output-root", "out"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert!(test.exists("out/common.ts"));
    assert!(stdout(&output).contains("Created out/components/index.ts"));

    Ok(())
}

#[test]
fn test_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_source()?;

    let output = test.split_command().arg("--dry-run").output()?;
    assert!(output.status.success());

    let stdout = stdout(&output);
    assert!(stdout.contains("  Would create lib/i18n/common.ts\n"));
    assert!(stdout.contains("3 files would be written (dry run)"));
    assert!(!test.exists("lib/i18n"));

    Ok(())
}

#[test]
fn test_check_reports_stale_outputs() -> Result<()> {
    let test = CliTest::with_source()?;

    let output = test.split_command().arg("--check").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("3 output files are out of date"));

    test.split_command().output()?;
    let output = test.split_command().arg("--check").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("All 3 output files are up to date"));

    test.write_file("lib/i18n/home.ts", "// edited by hand\n")?;
    let output = test.split_command().arg("--check").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("lib/i18n/home.ts is missing or out of date"));

    Ok(())
}

#[test]
fn test_missing_source_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.split_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Failed to read source file: lib/i18n.ts"));
    assert!(!test.exists("lib/i18n"));

    Ok(())
}

#[test]
fn test_missing_locale_block_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lib/i18n.ts", "export const content = {\n  en: {\n    nav: {},\n  },\n}\n")?;

    let output = test.split_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Could not find `ar: {` section in source document"));
    assert!(!test.exists("lib/i18n/common.ts"));

    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::with_source()?;
    test.write_file(
        ".i18nsplitrc.json",
        r#"{ "groupings": [{ "name": "bad", "output": "../escape.ts", "keys": ["nav"] }] }"#,
    )?;

    let output = test.split_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid output path for grouping \"bad\""));
    assert!(!test.root().parent().unwrap().join("escape.ts").exists());

    Ok(())
}

#[test]
fn test_split_from_subdirectory_uses_config_dir() -> Result<()> {
    let test = CliTest::with_source()?;
    test.write_file(".i18nsplitrc.json", "{}")?;
    test.write_file("app/page.tsx", "export default function Page() {}\n")?;

    let output = test
        .split_command()
        .current_dir(test.root().join("app"))
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.exists("lib/i18n/common.ts"));
    assert!(!test.exists("app/lib"));

    Ok(())
}

#[test]
fn test_split_creates_components_dir_when_skipped() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "lib/i18n.ts",
        "x = { en: { nav: { a: 1 }, home: { b: 2 } } ar: { nav: { a: 3 }, home: { b: 4 } } }",
    )?;

    let output = test.split_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("\nProcessing components...\n"));
    assert!(test.root().join("lib/i18n/components").is_dir());
    assert!(!test.exists("lib/i18n/components/index.ts"));

    Ok(())
}
