//! End-to-end tests for the extraction and remapping pipeline
//!
//! Documents go through a real parser, a scripted linter and back, and the
//! messages are checked against the document text.

use embedlint_core::{
    Fix, LintMessage, LinterError, Processor, ProcessorConfig, apply_fixes_to_content,
};
use embedlint_parser::MarkdownParser;
use pretty_assertions::assert_eq;

fn markdown() -> Processor<MarkdownParser> {
    Processor::new(MarkdownParser::new(), ProcessorConfig::default())
}

/// Reports a missing semicolon at the end of every line not ending in one.
fn semicolon_linter(source: &str) -> Result<Vec<LintMessage>, LinterError> {
    let mut messages = Vec::new();
    let mut offset = 0;

    for (index, line) in source.split('\n').enumerate() {
        let code = line.trim_end();
        let is_code = !code.is_empty() && !code.starts_with("/*");
        if is_code && !code.ends_with(';') && !code.ends_with('{') && !code.ends_with('}') {
            let end = offset + code.len();
            messages.push(
                LintMessage::new("semi", "Missing semicolon.", index as u32 + 1, code.len() as u32 + 1)
                    .with_fix(Fix::insert(end, ";")),
            );
        }
        offset += line.len() + 1;
    }

    Ok(messages)
}

mod markdown_documents {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fence_on_line_three_maps_to_line_four() {
        let document = "# Title\n\n```js\nvar x = 1\n```\n";
        let cycle = markdown().preprocess(document).unwrap();
        assert_eq!(cycle.sources(), vec!["var x = 1\n"]);

        let messages = cycle
            .postprocess(vec![vec![LintMessage::new("no-var", "Unexpected var.", 1, 1)]])
            .unwrap();

        assert_eq!(messages.len(), 1);
        assert_eq!((messages[0].line, messages[0].column), (4, 1));
    }

    #[test]
    fn directives_and_skips() {
        let document = "\
# Guide

<!-- eslint-skip -->

```js
this block is not linted
```

<!-- global config -->

```js
config.load()
```
";

        let cycle = markdown().preprocess(document).unwrap();
        assert_eq!(cycle.sources(), vec!["/* global config */\nconfig.load()\n"]);

        let messages = cycle
            .postprocess(vec![vec![
                LintMessage::new("no-undef", "'config' is not defined.", 1, 10),
                LintMessage::new("semi", "Missing semicolon.", 2, 14),
            ]])
            .unwrap();

        // The first message points into the synthetic comment.
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].line, 12);
        assert_eq!(messages[0].column, 14);
    }

    #[test]
    fn lint_and_fix_nested_blocks() {
        let document = "\
# Setup

```js
const a = 1
```

1. Install

   ```js
   install()
   if (ready) {
     start()
   }
   ```
";

        let messages = markdown().lint(document, &semicolon_linter).unwrap();
        let lines: Vec<u32> = messages.iter().map(|m| m.line).collect();
        assert_eq!(lines, vec![4, 10, 12]);

        let fixed = apply_fixes_to_content(document, &messages);

        assert_eq!(fixed.fixes_applied, 3);
        assert_eq!(
            fixed.fixed_content,
            "\
# Setup

```js
const a = 1;
```

1. Install

   ```js
   install();
   if (ready) {
     start();
   }
   ```
"
        );
    }

    #[test]
    fn fixes_inside_a_blockquote() {
        let document = "> Example:\n>\n> ```js\n> foo()\n> ```\n";

        let messages = markdown().lint(document, &semicolon_linter).unwrap();

        assert_eq!(messages.len(), 1);
        assert_eq!((messages[0].line, messages[0].column), (4, 8));
        let fixed = apply_fixes_to_content(document, &messages);
        assert_eq!(fixed.fixed_content, "> Example:\n>\n> ```js\n> foo();\n> ```\n");
    }

    #[test]
    fn disabling_fixes_in_config() {
        let config = ProcessorConfig::from_json(r#"{ "fix": false }"#).unwrap();
        let processor = Processor::new(MarkdownParser::new(), config);

        let messages = processor
            .lint("```js\nrun()\n```\n", &semicolon_linter)
            .unwrap();

        assert_eq!(messages.len(), 1);
        assert!(messages[0].fix.is_none());
    }
}

#[cfg(unix)]
mod external_parser_documents {
    use super::*;
    use pretty_assertions::assert_eq;
    use embedlint_parser::{ExternalParser, IndentStyle};
    use std::fs;
    use tempfile::tempdir;

    const QML: &str = "\
import QtQuick 2.0

Item {
    width: parent.width / 2
    function area() {
        return width * height
    }
}
";

    fn position(offset: usize) -> serde_json::Value {
        let before = &QML[..offset];
        let line = before.matches('\n').count() + 1;
        let column = offset - before.rfind('\n').map_or(0, |i| i + 1) + 1;
        serde_json::json!({ "offset": offset, "line": line, "column": column })
    }

    fn loc(start: usize, end: usize) -> serde_json::Value {
        serde_json::json!({ "start": position(start), "end": position(end) })
    }

    /// The tree a QML parser would print for [`QML`].
    fn qml_tree() -> serde_json::Value {
        let value_start = QML.find("parent").unwrap();
        let value_end = value_start + "parent.width / 2".len();
        let function_start = QML.find("function").unwrap();
        let function_end = QML.rfind("    }").unwrap() + 5;

        serde_json::json!({
            "kind": "Program",
            "children": [
                { "kind": "Import", "loc": loc(0, 18) },
                {
                    "kind": "Object",
                    "children": [
                        {
                            "kind": "Property",
                            "value": {
                                "kind": "JavascriptValue",
                                "value": "parent.width / 2",
                                "loc": loc(value_start, value_end)
                            }
                        },
                        {
                            "kind": "Function",
                            "body": "    return width * height\n}",
                            "loc": loc(function_start, function_end)
                        },
                        { "kind": "Signal", "children": [] }
                    ]
                }
            ]
        })
    }

    fn processor(dir: &std::path::Path, indent_style: IndentStyle) -> Processor<ExternalParser> {
        let tree = dir.join("tree.json");
        fs::write(&tree, qml_tree().to_string()).unwrap();

        // `$0` is the tree file; the document arrives as `$1` and is ignored.
        let parser = ExternalParser::new("sh")
            .with_args([
                "-c".to_string(),
                r#"cat "$0""#.to_string(),
                tree.to_string_lossy().into_owned(),
            ])
            .with_indent_style(indent_style);
        Processor::new(parser, ProcessorConfig::default())
    }

    #[test]
    fn blocks_come_out_in_document_order() {
        let dir = tempdir().unwrap();
        let cycle = processor(dir.path(), IndentStyle::Nesting).preprocess(QML).unwrap();

        assert_eq!(
            cycle.sources(),
            vec!["parent.width / 2\n", "    return width * height\n}\n"]
        );
    }

    #[test]
    fn function_messages_line_up_with_the_document() {
        let dir = tempdir().unwrap();
        let cycle = processor(dir.path(), IndentStyle::Column).preprocess(QML).unwrap();

        let messages = cycle
            .postprocess(vec![
                Vec::new(),
                vec![LintMessage::new("no-undef", "'height' is not defined.", 1, 20).with_end(1, 26)],
            ])
            .unwrap();

        // "height" sits on document line 6, column 24.
        assert_eq!(messages[0].line, 6);
        assert_eq!(messages[0].column, 24);
        assert_eq!(messages[0].end_column, Some(30));
        let line = QML.lines().nth(5).unwrap();
        assert_eq!(&line[23..29], "height");
    }

    #[test]
    fn value_messages_line_up_with_the_document() {
        let dir = tempdir().unwrap();

        for style in [IndentStyle::Nesting, IndentStyle::Column] {
            let cycle = processor(dir.path(), style).preprocess(QML).unwrap();
            let messages = cycle
                .postprocess(vec![
                    vec![LintMessage::new("no-undef", "'parent' is not defined.", 1, 1).with_end(1, 7)],
                    Vec::new(),
                ])
                .unwrap();

            // "parent" sits on document line 4, column 12.
            assert_eq!((messages[0].line, messages[0].column), (4, 12), "{:?}", style);
            assert_eq!(messages[0].end_column, Some(18));
            let line = QML.lines().nth(3).unwrap();
            assert_eq!(&line[11..17], "parent");
        }
    }

    #[test]
    fn value_fixes_land_on_the_value() {
        let dir = tempdir().unwrap();
        let cycle = processor(dir.path(), IndentStyle::Nesting).preprocess(QML).unwrap();

        let messages = cycle
            .postprocess(vec![
                vec![
                    LintMessage::new("prefer-root", "Use root.", 1, 1)
                        .with_fix(Fix::new(0, 6, "root")),
                ],
                Vec::new(),
            ])
            .unwrap();

        assert_eq!((messages[0].line, messages[0].column), (4, 12));
        let fixed = apply_fixes_to_content(QML, &messages);
        assert!(fixed.fixed_content.contains("    width: root.width / 2\n"));
    }
}
