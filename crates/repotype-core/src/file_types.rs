//! Default file-type heuristic.
//!
//! Ordered glob rules over the lowercased basename; the first match wins and
//! anything unmatched is `"unknown"`. Build and developer-doc names come
//! before the generic extension rules so `CMakeLists.txt` is `build` and
//! `README.txt` is `devel-doc` rather than `documentation`.

use glob::Pattern;

use crate::config::ClassifierConfig;
use crate::errors::ExtensionError;
use crate::traits::Classifier;

pub const UNKNOWN: &str = "unknown";

const BUILTIN_RULES: &[(&str, &[&str])] = &[
    (
        "build",
        &[
            "makefile", "makefile.*", "gnumakefile", "*.mk", "*.mak", "*.am", "configure",
            "configure.ac", "configure.in", "*.m4", "cmakelists.txt", "*.cmake", "meson.build",
            "meson_options.txt", "sconstruct", "sconscript", "build.xml", "pom.xml", "*.gradle",
            "cargo.toml", "cargo.lock", "*.pro", "*.pri", "*.spec", "autogen.sh", "*.sln",
            "*.vcproj", "*.vcxproj", "*.csproj", "jamfile", "*.jam",
        ],
    ),
    (
        "devel-doc",
        &[
            "readme", "readme.*", "changelog", "changelog.*", "changes", "news", "news.*",
            "todo", "todo.*", "hacking", "authors", "authors.*", "maintainers", "install",
            "install.*", "copying", "copying.*", "license", "license.*", "thanks", "bugs",
            "*.changes", "contributing", "contributing.*",
        ],
    ),
    ("i18n", &["*.po", "*.pot", "*.mo", "*.gmo", "*.xlf", "*.xliff"]),
    (
        "ui",
        &["*.glade", "*.ui", "*.gtkbuilder", "*.desktop", "*.desktop.in", "*.xul", "*.css", "*.qml"],
    ),
    (
        "image",
        &[
            "*.png", "*.jpg", "*.jpeg", "*.gif", "*.svg", "*.svgz", "*.ico", "*.bmp", "*.xpm",
            "*.xbm", "*.tif", "*.tiff", "*.xcf", "*.eps", "*.icns", "*.webp",
        ],
    ),
    (
        "multimedia",
        &[
            "*.wav", "*.mp3", "*.ogg", "*.oga", "*.flac", "*.mid", "*.midi", "*.avi", "*.mpg",
            "*.mpeg", "*.mp4", "*.mov", "*.webm", "*.ogv", "*.swf",
        ],
    ),
    (
        "package",
        &[
            "*.tar", "*.tar.gz", "*.tgz", "*.tar.bz2", "*.tbz2", "*.tar.xz", "*.gz", "*.bz2",
            "*.xz", "*.zip", "*.jar", "*.war", "*.deb", "*.rpm", "*.gem", "*.whl", "*.7z",
        ],
    ),
    (
        "documentation",
        &[
            "*.txt", "*.html", "*.htm", "*.xhtml", "*.sgml", "*.docbook", "*.tex", "*.texi",
            "*.texinfo", "*.rst", "*.md", "*.markdown", "*.adoc", "*.pdf", "*.ps", "*.dvi",
            "*.rtf", "*.odt", "*.doc", "*.docx", "*.man", "*.[1-9]",
        ],
    ),
    (
        "code",
        &[
            "*.c", "*.h", "*.cc", "*.cpp", "*.cxx", "*.c++", "*.hh", "*.hpp", "*.hxx", "*.inl",
            "*.java", "*.py", "*.pyx", "*.pl", "*.pm", "*.rb", "*.php", "*.js", "*.mjs", "*.ts",
            "*.tsx", "*.jsx", "*.rs", "*.go", "*.cs", "*.m", "*.mm", "*.sh", "*.bash", "*.zsh",
            "*.el", "*.lisp", "*.scm", "*.hs", "*.ml", "*.mli", "*.scala", "*.kt", "*.swift",
            "*.lua", "*.sql", "*.vala", "*.vapi", "*.y", "*.l", "*.s", "*.asm", "*.f",
            "*.f90", "*.pas", "*.tcl", "*.r", "*.d", "*.erl", "*.ex", "*.exs", "*.clj",
            "*.groovy", "*.idl", "*.awk", "*.sed",
        ],
    ),
];

/// Rule-table classifier.
#[derive(Debug, Clone)]
pub struct FileTypeClassifier {
    rules: Vec<(Pattern, String)>,
}

impl FileTypeClassifier {
    /// Classifier using only the built-in table.
    pub fn new() -> Self {
        let rules = BUILTIN_RULES
            .iter()
            .flat_map(|(file_type, patterns)| {
                patterns.iter().filter_map(move |p| {
                    Pattern::new(p).ok().map(|pat| (pat, (*file_type).to_string()))
                })
            })
            .collect();
        Self { rules }
    }

    /// Built-in table preceded by the configured rules.
    pub fn from_config(config: &ClassifierConfig) -> Result<Self, ExtensionError> {
        let mut rules = Vec::with_capacity(config.rules.len());
        for rule in &config.rules {
            let pattern = Pattern::new(&rule.pattern.to_lowercase()).map_err(|e| {
                ExtensionError::Config(format!("invalid classifier pattern '{}': {e}", rule.pattern))
            })?;
            rules.push((pattern, rule.file_type.clone()));
        }
        rules.extend(Self::new().rules);
        ::tracing::debug!(custom = config.rules.len(), total = rules.len(), "file-type rules loaded");
        Ok(Self { rules })
    }

    /// Category for `name`, matched on its lowercased basename.
    pub fn guess(&self, name: &str) -> &str {
        let base = name.rsplit(['/', '\\']).next().unwrap_or(name).to_lowercase();
        self.rules
            .iter()
            .find(|(pattern, _)| pattern.matches(&base))
            .map(|(_, file_type)| file_type.as_str())
            .unwrap_or(UNKNOWN)
    }
}

impl Default for FileTypeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for FileTypeClassifier {
    fn classify(&self, name: &str) -> String {
        self.guess(name).to_string()
    }
}
