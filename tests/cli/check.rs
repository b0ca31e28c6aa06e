use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

const VIOLATING_COMPONENT: &str = concat!(
    "import { useEffect } from 'react';\n",
    "export function App() {\n",
    "    useEffect(() => {}, []);\n",
    "    return null;\n",
    "}\n",
);

#[test]
fn test_direct_use_effect_fails_check() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", VIOLATING_COMPONENT)?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("no-use-effect"), "missing rule tag: {out}");
    assert!(
        out.contains("Use useMajboori instead and provide a reason."),
        "missing message: {out}"
    );
    assert!(out.contains("src/app.tsx:3:5"), "missing location: {out}");
    assert!(out.contains("1 problem (1 error, 0 warnings)"), "missing summary: {out}");

    Ok(())
}

#[test]
fn test_clean_project_passes() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        concat!(
            "import { useMajboori } from 'majboori';\n",
            "export function App() {\n",
            "    useMajboori(() => {}, [], 'needs direct DOM access for focus');\n",
            "    return null;\n",
            "}\n",
        ),
    )?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(
        out.contains("No direct useEffect usage found (checked 1 source file)"),
        "missing success line: {out}"
    );

    Ok(())
}

#[test]
fn test_aliased_import_is_caught() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        "import { useEffect as fx } from 'react';\nfx(() => {}, []);\n",
    )?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("src/app.tsx:2:1"), "missing location: {out}");

    Ok(())
}

#[test]
fn test_qualified_call_is_caught() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        "import React from 'react';\nReact.useEffect(() => {}, []);\n",
    )?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

#[test]
fn test_other_module_passes() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        "import { useEffect } from 'some-other-lib';\nuseEffect(() => {}, []);\n",
    )?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_multiple_files_are_all_reported() -> Result<()> {
    let test = CliTest::with_file("src/a.tsx", VIOLATING_COMPONENT)?;
    test.write_file("src/b.tsx", VIOLATING_COMPONENT)?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("src/a.tsx:3:5"), "missing a.tsx: {out}");
    assert!(out.contains("src/b.tsx:3:5"), "missing b.tsx: {out}");
    assert!(out.contains("2 problems (2 errors, 0 warnings)"), "missing summary: {out}");

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(
        ".majboorirc.json",
        r#"{ "ignores": ["**/generated/**"] }"#,
    )?;
    test.write_file("generated/hooks.tsx", VIOLATING_COMPONENT)?;
    test.write_file("src/app.tsx", "export const ok = 1;\n")?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_config_includes() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(".majboorirc.json", r#"{ "includes": ["src"] }"#)?;
    test.write_file("src/app.tsx", "export const ok = 1;\n")?;
    test.write_file("scripts/migrate.ts", VIOLATING_COMPONENT)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_test_files_are_skipped_by_default() -> Result<()> {
    let test = CliTest::with_file("src/app.test.tsx", VIOLATING_COMPONENT)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_unparsable_file_is_a_warning_not_a_failure() -> Result<()> {
    let test = CliTest::with_file("src/broken.ts", "export default (\n")?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("parse-error"), "missing parse-error tag: {out}");
    assert!(out.contains("0 errors, 1 warning"), "missing summary: {out}");

    Ok(())
}

#[test]
fn test_check_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", VIOLATING_COMPONENT)?;

    let first = test.check_command().output()?;
    let second = test.check_command().output()?;

    assert_eq!(stdout(&first), stdout(&second));
    assert_eq!(first.status.code(), second.status.code());

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("check"), "missing check command: {out}");
    assert!(out.contains("init"), "missing init command: {out}");

    Ok(())
}
