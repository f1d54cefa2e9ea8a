use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::error::{ReferrerBlockError, Result};
use crate::types::{RuleKind, TextRule};

/// Regex pattern for parsing rule lines
/// Format: category(value)
static RULE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([\w\-]+)\s*\(([^()]*)\)$").expect("RULE_PATTERN: hardcoded regex is invalid")
});

/// Maximum nesting depth for `file:` include directives.
const MAX_INCLUDE_DEPTH: usize = 10;

/// Parse blocklist rules from text.
///
/// One `category(value)` per line, where category is one of `tld`, `domain`,
/// `pattern`, `prefix` (or `subdomain_prefix`) and `wildcard`. `#` starts a
/// comment. Supports `file: /path/to/more.rules` to include another file.
pub fn parse_rules(text: &str) -> Result<Vec<TextRule>> {
    parse_rules_inner(text, 0)
}

fn parse_rules_inner(text: &str, depth: usize) -> Result<Vec<TextRule>> {
    if depth > MAX_INCLUDE_DEPTH {
        return Err(ReferrerBlockError::ParseError(format!(
            "file include depth exceeds maximum ({MAX_INCLUDE_DEPTH}), possible circular include"
        )));
    }

    let mut rules = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers

        // Remove comments and trim whitespace
        let line = match line.find('#') {
            Some(comment_pos) => &line[..comment_pos],
            None => line,
        };
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(path) = line.strip_prefix("file:") {
            let file_rules = parse_rules_from_file_inner(path.trim(), depth + 1)?;
            rules.extend(file_rules);
            continue;
        }

        rules.push(parse_single_rule(line, line_num)?);
    }

    Ok(rules)
}

/// Parse blocklist rules from a file.
pub fn parse_rules_from_file(path: impl AsRef<Path>) -> Result<Vec<TextRule>> {
    parse_rules_from_file_inner(path, 0)
}

fn parse_rules_from_file_inner(path: impl AsRef<Path>, depth: usize) -> Result<Vec<TextRule>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        ReferrerBlockError::ParseError(format!(
            "Failed to read rules file '{}': {}",
            path.display(),
            e
        ))
    })?;
    parse_rules_inner(&text, depth)
}

/// Parse a single rule line
fn parse_single_rule(line: &str, line_num: usize) -> Result<TextRule> {
    let captures = RULE_PATTERN
        .captures(line)
        .ok_or_else(|| ReferrerBlockError::ParseErrorAtLine {
            line: line_num,
            message: format!("Invalid rule format: {}", line),
        })?;

    let (_, [name, value]) = captures.extract();

    let kind = RuleKind::from_name(name)
        .ok_or_else(|| ReferrerBlockError::UnknownCategory(name.to_string()))?;

    let value = value.trim();
    if value.is_empty() {
        return Err(ReferrerBlockError::ParseErrorAtLine {
            line: line_num,
            message: "Empty value".to_string(),
        });
    }

    Ok(TextRule {
        kind,
        value: value.to_string(),
        line_num,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_pattern_regex_compiles() {
        assert!(RULE_PATTERN.is_match("tld(.icu)"));
    }

    #[test]
    fn test_parse_simple_rule() {
        let rules = parse_rules("domain(gazdp.com)").unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].kind, RuleKind::Domain);
        assert_eq!(rules[0].value, "gazdp.com");
        assert_eq!(rules[0].line_num, 1);
    }

    #[test]
    fn test_parse_all_categories() {
        let text = r#"
# TLDs
tld(.icu)
TLD(.biz.id)

domain( gazdp.com )
pattern(ctysss)
prefix(iqri)
subdomain_prefix(hk)
wildcard(*crmsoftware*.com)
"#;
        let rules = parse_rules(text).unwrap();
        let kinds: Vec<RuleKind> = rules.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RuleKind::Tld,
                RuleKind::Tld,
                RuleKind::Domain,
                RuleKind::Pattern,
                RuleKind::SubdomainPrefix,
                RuleKind::SubdomainPrefix,
                RuleKind::Wildcard,
            ]
        );
        assert_eq!(rules[2].value, "gazdp.com");
        assert_eq!(rules[6].value, "*crmsoftware*.com");
    }

    #[test]
    fn test_parse_inline_comment() {
        let rules = parse_rules("pattern(ikancupang) # fishing spam").unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].value, "ikancupang");
    }

    #[test]
    fn test_parse_invalid_rule() {
        let result = parse_rules("tld .icu");
        match result {
            Err(ReferrerBlockError::ParseErrorAtLine { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected ParseErrorAtLine, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_unknown_category() {
        let result = parse_rules("regex(.*spam.*)");
        assert!(matches!(
            result,
            Err(ReferrerBlockError::UnknownCategory(name)) if name == "regex"
        ));
    }

    #[test]
    fn test_parse_rejects_empty_value() {
        let result = parse_rules("domain(gazdp.com)\npattern(   )");
        match result {
            Err(ReferrerBlockError::ParseErrorAtLine { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("Empty"));
            }
            other => panic!("expected ParseErrorAtLine, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_file_directive() {
        use std::io::Write;
        let dir = std::env::temp_dir().join("referrer_block_test");
        let _ = fs::create_dir_all(&dir);
        let file_path = dir.join("test_rules.rules");
        let mut f = fs::File::create(&file_path).unwrap();
        writeln!(f, "domain(gazdp.com)").unwrap();
        writeln!(f, "pattern(ctysss)").unwrap();
        drop(f);

        let text = format!("tld(.icu)\nfile: {}\nprefix(iqri)", file_path.display());
        let rules = parse_rules(&text).unwrap();
        assert_eq!(rules.len(), 4);
        assert_eq!(rules[0].value, ".icu");
        assert_eq!(rules[1].value, "gazdp.com");
        assert_eq!(rules[2].value, "ctysss");
        assert_eq!(rules[3].value, "iqri");

        let _ = fs::remove_file(&file_path);
        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn test_parse_file_directive_not_found() {
        let result = parse_rules("file: /nonexistent/path/referrer.rules");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_file_circular_include() {
        use std::io::Write;
        let dir = std::env::temp_dir().join("referrer_block_test_circular");
        let _ = fs::create_dir_all(&dir);

        let file_a = dir.join("a.rules");
        let file_b = dir.join("b.rules");

        let mut f = fs::File::create(&file_a).unwrap();
        writeln!(f, "tld(.icu)").unwrap();
        writeln!(f, "file: {}", file_b.display()).unwrap();
        drop(f);

        let mut f = fs::File::create(&file_b).unwrap();
        writeln!(f, "domain(gazdp.com)").unwrap();
        writeln!(f, "file: {}", file_a.display()).unwrap();
        drop(f);

        let result = parse_rules_from_file(&file_a);
        assert!(result.is_err(), "Circular file include should return error");
        let err_msg = format!("{}", result.unwrap_err());
        assert!(
            err_msg.contains("include depth"),
            "Error should mention include depth, got: {}",
            err_msg
        );

        let _ = fs::remove_file(&file_a);
        let _ = fs::remove_file(&file_b);
        let _ = fs::remove_dir(&dir);
    }
}
