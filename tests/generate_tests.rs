use anyhow::Result;
use qrcgen::{generate, AliasMode, GenerateOptions};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// `a.png` and `sub/b.txt` under `<tmp>/res`
fn create_resource_tree() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().join("res");
    fs::create_dir_all(root.join("sub"))?;
    fs::write(root.join("a.png"), [0x89, 0x50, 0x4e, 0x47])?;
    fs::write(root.join("sub/b.txt"), "hello")?;
    Ok(temp_dir)
}

/// Parse `<file alias="A">C</file>` lines back into pairs.
fn file_lines(document: &str) -> Vec<(String, String)> {
    document
        .lines()
        .filter_map(|line| {
            let rest = line.strip_prefix("    <file alias=\"")?;
            let (alias, rest) = rest.split_once("\">")?;
            let content = rest.strip_suffix("</file>")?;
            Some((alias.to_string(), content.to_string()))
        })
        .collect()
}

fn count_files(dir: &Path) -> usize {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}

#[test]
fn test_name_mode_end_to_end() -> Result<()> {
    let temp_dir = create_resource_tree()?;
    let out = temp_dir.path().join("res.qrc");

    generate(
        &temp_dir.path().join("res"),
        "res",
        &out,
        &GenerateOptions::default(),
    )?;

    let document = fs::read_to_string(&out)?;
    assert!(document.starts_with("<qresource prefix=\"/res\">\n"));
    assert!(document.ends_with("\n</qresource>"));

    let pairs: BTreeSet<_> = file_lines(&document).into_iter().collect();
    let expected: BTreeSet<_> = [("a.png", "a.png"), ("b.txt", "sub/b.txt")]
        .iter()
        .map(|(a, c)| (a.to_string(), c.to_string()))
        .collect();
    assert_eq!(pairs, expected);
    Ok(())
}

#[test]
fn test_indexed_mode_end_to_end() -> Result<()> {
    let temp_dir = create_resource_tree()?;
    let out = temp_dir.path().join("res.qrc");

    let report = generate(
        &temp_dir.path().join("res"),
        "res",
        &out,
        &GenerateOptions::with_alias_mode(AliasMode::Indexed),
    )?;

    let pairs = file_lines(&fs::read_to_string(&out)?);
    assert_eq!(pairs.len(), 2);
    for (i, (alias, content)) in pairs.iter().enumerate() {
        assert_eq!(alias, &(i + 1).to_string());
        assert_eq!(content, &format!("res/{}", report.entries[i].relative_path));
    }
    let contents: BTreeSet<_> = pairs.iter().map(|(_, c)| c.as_str()).collect();
    assert_eq!(contents, BTreeSet::from(["res/a.png", "res/sub/b.txt"]));
    Ok(())
}

#[test]
fn test_every_file_listed_once() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().join("assets");
    for dir in ["icons/small", "icons/large", "qml", "fonts"] {
        fs::create_dir_all(root.join(dir))?;
    }
    for (i, file) in [
        "icons/small/open.svg",
        "icons/small/close.svg",
        "icons/large/open.svg",
        "qml/Main.qml",
        "fonts/mono.ttf",
        "README",
    ]
    .iter()
    .enumerate()
    {
        fs::write(root.join(file), format!("{}", i))?;
    }
    let on_disk = count_files(&root);

    for mode in [AliasMode::Name, AliasMode::Indexed] {
        let out = temp_dir.path().join("out.qrc");
        generate(&root, "app", &out, &GenerateOptions::with_alias_mode(mode))?;

        let pairs = file_lines(&fs::read_to_string(&out)?);
        assert_eq!(pairs.len(), on_disk, "mode {:?}", mode);

        let contents: BTreeSet<_> = pairs.iter().map(|(_, c)| c.clone()).collect();
        assert_eq!(contents.len(), on_disk, "duplicate content in mode {:?}", mode);
        assert!(pairs.iter().all(|(_, c)| !c.contains('\\')));
    }
    Ok(())
}

#[test]
fn test_indexed_numbers_files_before_subdirectories() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().join("res");
    fs::create_dir_all(root.join("sub"))?;
    for name in ["a.txt", "m.txt", "y.txt", "z.txt"] {
        fs::write(root.join(name), name)?;
    }
    fs::write(root.join("sub/b.txt"), "b")?;
    let out = temp_dir.path().join("res.qrc");

    generate(&root, "res", &out, &GenerateOptions::with_alias_mode(AliasMode::Indexed))?;

    let pairs = file_lines(&fs::read_to_string(&out)?);
    assert_eq!(pairs.len(), 5);
    assert!(pairs[..4].iter().all(|(_, c)| !c.starts_with("res/sub/")));
    assert_eq!(pairs[4], ("5".to_string(), "res/sub/b.txt".to_string()));
    Ok(())
}

#[test]
fn test_indexed_mode_is_repeatable() -> Result<()> {
    let temp_dir = create_resource_tree()?;
    let root = temp_dir.path().join("res");
    let first = temp_dir.path().join("first.qrc");
    let second = temp_dir.path().join("second.qrc");
    let options = GenerateOptions::with_alias_mode(AliasMode::Indexed);

    generate(&root, "res", &first, &options)?;
    generate(&root, "res", &second, &options)?;

    assert_eq!(fs::read(&first)?, fs::read(&second)?);
    Ok(())
}

#[test]
fn test_empty_directory_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().join("empty");
    fs::create_dir_all(root.join("nested/also_empty"))?;
    let out = temp_dir.path().join("empty.qrc");

    for mode in [AliasMode::Name, AliasMode::Indexed] {
        generate(&root, "P", &out, &GenerateOptions::with_alias_mode(mode))?;
        assert_eq!(
            fs::read_to_string(&out)?,
            "<qresource prefix=\"/P\">\n\n</qresource>"
        );
    }
    Ok(())
}

#[test]
fn test_sorted_indexed_numbering() -> Result<()> {
    let temp_dir = create_resource_tree()?;
    let out = temp_dir.path().join("res.qrc");
    let options = GenerateOptions {
        alias_mode: AliasMode::Indexed,
        sort: true,
        ..Default::default()
    };

    generate(&temp_dir.path().join("res"), "res", &out, &options)?;

    assert_eq!(
        fs::read_to_string(&out)?,
        "<qresource prefix=\"/res\">\n    <file alias=\"1\">res/a.png</file>\n    <file alias=\"2\">res/sub/b.txt</file>\n</qresource>"
    );
    Ok(())
}

#[test]
fn test_output_into_missing_directory_fails() -> Result<()> {
    let temp_dir = create_resource_tree()?;
    let out = temp_dir.path().join("no/such/dir/res.qrc");

    let err = generate(
        &temp_dir.path().join("res"),
        "res",
        &out,
        &GenerateOptions::default(),
    )
    .unwrap_err();

    assert!(!err.is_input_error());
    assert!(err.to_string().starts_with("I/O error"));
    Ok(())
}

#[test]
fn test_root_that_is_a_file_fails() -> Result<()> {
    let temp_dir = create_resource_tree()?;
    let out = temp_dir.path().join("res.qrc");

    let err = generate(
        &temp_dir.path().join("res/a.png"),
        "res",
        &out,
        &GenerateOptions::default(),
    )
    .unwrap_err();

    assert!(err.is_input_error());
    assert!(!out.exists());
    Ok(())
}
