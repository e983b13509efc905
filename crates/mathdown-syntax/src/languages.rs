//! Language alias and label mapping.
//!
//! Fence info strings arrive in whatever form the author typed ("py",
//! "TS", "c++"). Aliases map them to syntect syntax names; labels map
//! them to the human-readable name shown in the code block header.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Lowercase fence alias to canonical syntect syntax name.
pub static LANGUAGE_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert("python", "Python");
    m.insert("py", "Python");
    m.insert("python3", "Python");

    m.insert("javascript", "JavaScript");
    m.insert("js", "JavaScript");
    m.insert("jsx", "JavaScript (Babel)");
    m.insert("node", "JavaScript");

    m.insert("typescript", "TypeScript");
    m.insert("ts", "TypeScript");
    m.insert("tsx", "TypeScript");

    m.insert("rust", "Rust");
    m.insert("rs", "Rust");

    m.insert("bash", "Bourne Again Shell (bash)");
    m.insert("sh", "Bourne Again Shell (bash)");
    m.insert("shell", "Bourne Again Shell (bash)");
    m.insert("zsh", "Bourne Again Shell (bash)");

    m.insert("c", "C");
    m.insert("cpp", "C++");
    m.insert("c++", "C++");
    m.insert("csharp", "C#");
    m.insert("cs", "C#");

    m.insert("go", "Go");
    m.insert("golang", "Go");

    m.insert("java", "Java");
    m.insert("kotlin", "Kotlin");
    m.insert("kt", "Kotlin");
    m.insert("swift", "Swift");

    m.insert("ruby", "Ruby");
    m.insert("rb", "Ruby");
    m.insert("php", "PHP");
    m.insert("lua", "Lua");
    m.insert("r", "R");
    m.insert("scala", "Scala");
    m.insert("haskell", "Haskell");
    m.insert("hs", "Haskell");

    m.insert("sql", "SQL");
    m.insert("mysql", "SQL");
    m.insert("postgres", "SQL");
    m.insert("sqlite", "SQL");

    m.insert("html", "HTML");
    m.insert("htm", "HTML");
    m.insert("css", "CSS");
    m.insert("scss", "SCSS");

    m.insert("json", "JSON");
    m.insert("jsonc", "JSON");
    m.insert("yaml", "YAML");
    m.insert("yml", "YAML");
    m.insert("toml", "TOML");
    m.insert("xml", "XML");
    m.insert("svg", "XML");

    m.insert("markdown", "Markdown");
    m.insert("md", "Markdown");
    m.insert("latex", "LaTeX");
    m.insert("tex", "TeX");

    m.insert("makefile", "Makefile");
    m.insert("make", "Makefile");
    m.insert("dockerfile", "Dockerfile");
    m.insert("docker", "Dockerfile");

    m.insert("diff", "Diff");
    m.insert("patch", "Diff");

    m.insert("ini", "INI");
    m.insert("conf", "INI");

    m.insert("text", "Plain Text");
    m.insert("txt", "Plain Text");
    m.insert("plain", "Plain Text");

    m
});

/// Header labels for languages whose fence alias reads poorly as-is.
static LANGUAGE_LABELS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert("py", "Python");
    m.insert("python", "Python");
    m.insert("python3", "Python");
    m.insert("js", "JavaScript");
    m.insert("javascript", "JavaScript");
    m.insert("jsx", "JSX");
    m.insert("node", "JavaScript");
    m.insert("ts", "TypeScript");
    m.insert("typescript", "TypeScript");
    m.insert("tsx", "TSX");
    m.insert("rs", "Rust");
    m.insert("rust", "Rust");
    m.insert("sh", "Shell");
    m.insert("bash", "Bash");
    m.insert("shell", "Shell");
    m.insert("zsh", "Zsh");
    m.insert("c", "C");
    m.insert("cpp", "C++");
    m.insert("c++", "C++");
    m.insert("csharp", "C#");
    m.insert("cs", "C#");
    m.insert("go", "Go");
    m.insert("golang", "Go");
    m.insert("java", "Java");
    m.insert("kotlin", "Kotlin");
    m.insert("kt", "Kotlin");
    m.insert("swift", "Swift");
    m.insert("ruby", "Ruby");
    m.insert("rb", "Ruby");
    m.insert("php", "PHP");
    m.insert("lua", "Lua");
    m.insert("sql", "SQL");
    m.insert("html", "HTML");
    m.insert("css", "CSS");
    m.insert("scss", "SCSS");
    m.insert("json", "JSON");
    m.insert("yaml", "YAML");
    m.insert("yml", "YAML");
    m.insert("toml", "TOML");
    m.insert("xml", "XML");
    m.insert("markdown", "Markdown");
    m.insert("md", "Markdown");
    m.insert("latex", "LaTeX");
    m.insert("tex", "TeX");
    m.insert("makefile", "Makefile");
    m.insert("dockerfile", "Dockerfile");
    m.insert("diff", "Diff");
    m.insert("text", "Text");
    m.insert("txt", "Text");
    m.insert("plain", "Text");

    m
});

/// Look up the canonical syntect syntax name for a fence alias.
///
/// Returns the original input unchanged when no alias matches.
///
/// # Example
/// ```
/// use mathdown_syntax::language_alias;
///
/// assert_eq!(language_alias("py"), "Python");
/// assert_eq!(language_alias("TS"), "TypeScript");
/// assert_eq!(language_alias("mystery"), "mystery");
/// ```
pub fn language_alias(name: &str) -> &str {
    let lower = name.to_lowercase();
    LANGUAGE_ALIASES
        .get(lower.as_str())
        .copied()
        .unwrap_or(name)
}

/// Header label for a fence language.
///
/// Known aliases get their display name; anything else is shown as
/// the author typed it.
pub fn language_label(name: &str) -> &str {
    let lower = name.to_lowercase();
    LANGUAGE_LABELS.get(lower.as_str()).copied().unwrap_or(name)
}

/// Iterate (alias, canonical syntax name) pairs.
pub fn all_aliases() -> impl Iterator<Item = (&'static str, &'static str)> {
    LANGUAGE_ALIASES.iter().map(|(k, v)| (*k, *v))
}
