//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// A prompt document that satisfies every validation rule
pub const VALID_PROMPT: &str = r#"# Code Review Assistant

## Metadata

- **Category**: Coding
- **Difficulty**: Intermediate
- **Model Compatibility**: GPT-4, Claude 3, Gemini
- **Tags**: `#review` `#python` `#quality`
- **Author**: @reviewer
- **Date Added**: 2024-01-15
- **Version**: 1.0

## Description

Reviews a code snippet for bugs, style issues, and maintainability problems. Returns prioritized, actionable feedback.

## Use Case

Use this before opening a pull request to catch common mistakes early.

## The Prompt

```
You are a senior software engineer performing a code review.
Review the following {language} code and list bugs, style issues,
and maintainability concerns, ordered by severity:

{code}
```

## Variables to Customize

- `{language}`: the programming language of the snippet
- `{code}`: the code to review

## Example Input/Output

**Input:**
```
language: Python
code: def add(a, b): return a - b
```

**Output:**
```
1. Bug: `add` subtracts instead of adding.
```

## Performance Notes

Works best with snippets under 200 lines.

## Related Prompts

- [Refactoring Helper](refactoring-helper.md)

## Version History

- 1.0 (2024-01-15): Initial version
"#;

/// Build a minimal but well-formed prompt with the given metadata
pub fn prompt(title: &str, category: &str, difficulty: &str, date: &str, tags: &[&str]) -> String {
    let tags: Vec<String> = tags.iter().map(|t| format!("`#{}`", t)).collect();
    VALID_PROMPT
        .replace("# Code Review Assistant", &format!("# {}", title))
        .replace("**Category**: Coding", &format!("**Category**: {}", category))
        .replace(
            "**Difficulty**: Intermediate",
            &format!("**Difficulty**: {}", difficulty),
        )
        .replace("**Date Added**: 2024-01-15", &format!("**Date Added**: {}", date))
        .replace(
            "`#review` `#python` `#quality`",
            &tags.join(" "),
        )
}

/// Write `content` to `root/rel`, creating parent directories
pub fn write(root: &Path, rel: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, content).unwrap();
    path
}
